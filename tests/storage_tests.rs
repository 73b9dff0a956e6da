//! Storage backend tests
//!
//! Exercises the Backend contract against the embedded sled implementation
//! using temporary data directories. Redis tests need a live server and are
//! ignored by default.

use std::collections::HashSet;
use std::sync::Arc;

use tempfile::TempDir;

use golinks::storage::backends::sled::SledBackend;
use golinks::storage::{Backend, Link};

fn sled_backend() -> (TempDir, SledBackend) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let backend =
        SledBackend::new(dir.path().to_str().unwrap()).expect("Failed to open sled backend");
    (dir, backend)
}

#[tokio::test]
async fn test_set_then_get_returns_target() {
    let (_dir, backend) = sled_backend();

    backend
        .set(Link::new("docs", "https://docs.example.com"))
        .await
        .unwrap();

    let link = backend.get("docs").await.unwrap();
    assert_eq!(link, Some(Link::new("docs", "https://docs.example.com")));
}

#[tokio::test]
async fn test_get_missing_keyword_is_none_not_error() {
    let (_dir, backend) = sled_backend();

    let link = backend.get("never-set").await.unwrap();
    assert_eq!(link, None);
}

#[tokio::test]
async fn test_set_overwrites_previous_target() {
    let (_dir, backend) = sled_backend();

    backend.set(Link::new("wiki", "https://old.example.com")).await.unwrap();
    backend.set(Link::new("wiki", "https://new.example.com")).await.unwrap();

    let link = backend.get("wiki").await.unwrap().unwrap();
    assert_eq!(link.target, "https://new.example.com");
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let (_dir, backend) = sled_backend();

    backend.set(Link::new("gone", "https://example.com")).await.unwrap();
    backend.remove("gone").await.unwrap();
    backend.remove("gone").await.unwrap();
    backend.remove("never-existed").await.unwrap();

    assert_eq!(backend.get("gone").await.unwrap(), None);
}

#[tokio::test]
async fn test_load_all_reflects_puts_and_deletes() {
    let (_dir, backend) = sled_backend();

    backend.set(Link::new("a", "https://a.example.com")).await.unwrap();
    backend.set(Link::new("b", "https://b.example.com")).await.unwrap();
    backend.remove("a").await.unwrap();

    let links = backend.load_all().await.unwrap();
    assert_eq!(links, vec![Link::new("b", "https://b.example.com")]);
}

#[tokio::test]
async fn test_load_all_has_no_duplicates() {
    let (_dir, backend) = sled_backend();

    for i in 0..20 {
        backend
            .set(Link::new(format!("kw{}", i), format!("https://example.com/{}", i)))
            .await
            .unwrap();
    }
    // Overwrites must not create extra entries
    backend.set(Link::new("kw3", "https://example.com/other")).await.unwrap();

    let links = backend.load_all().await.unwrap();
    assert_eq!(links.len(), 20);

    let keywords: HashSet<String> = links.into_iter().map(|l| l.keyword).collect();
    assert_eq!(keywords.len(), 20);
}

#[tokio::test]
async fn test_keywords_are_case_sensitive() {
    let (_dir, backend) = sled_backend();

    backend.set(Link::new("Docs", "https://upper.example.com")).await.unwrap();
    backend.set(Link::new("docs", "https://lower.example.com")).await.unwrap();

    assert_eq!(
        backend.get("Docs").await.unwrap().unwrap().target,
        "https://upper.example.com"
    );
    assert_eq!(
        backend.get("docs").await.unwrap().unwrap().target,
        "https://lower.example.com"
    );
}

#[tokio::test]
async fn test_concurrent_puts_to_distinct_keywords() {
    let (_dir, backend) = sled_backend();
    let backend = Arc::new(backend);

    let mut handles = Vec::new();
    for i in 0..32 {
        let backend = backend.clone();
        handles.push(tokio::spawn(async move {
            backend
                .set(Link::new(format!("kw{}", i), format!("https://example.com/{}", i)))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..32 {
        let link = backend.get(&format!("kw{}", i)).await.unwrap().unwrap();
        assert_eq!(link.target, format!("https://example.com/{}", i));
    }
}

#[tokio::test]
async fn test_second_open_of_same_directory_fails() {
    let (dir, _backend) = sled_backend();

    // sled holds an exclusive lock per data directory
    let second = SledBackend::new(dir.path().to_str().unwrap());
    assert!(second.is_err());
}

#[tokio::test]
async fn test_close_after_no_operations() {
    let (_dir, backend) = sled_backend();
    backend.close().await.unwrap();
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_str().unwrap().to_string();

    {
        let backend = SledBackend::new(&path).unwrap();
        backend.set(Link::new("persist", "https://example.com")).await.unwrap();
        backend.close().await.unwrap();
    }

    let backend = SledBackend::new(&path).unwrap();
    let link = backend.get("persist").await.unwrap().unwrap();
    assert_eq!(link.target, "https://example.com");
}

mod redis_backend {
    //! Run with a local redis and `cargo test -- --ignored`.

    use golinks::storage::backends::redis::RedisBackend;
    use golinks::storage::{Backend, Link};

    const TEST_URL: &str = "redis://127.0.0.1:6379/";

    #[tokio::test]
    #[ignore]
    async fn test_set_get_remove_roundtrip() {
        let backend = RedisBackend::new(TEST_URL).await.unwrap();

        backend
            .set(Link::new("redis-test", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(
            backend.get("redis-test").await.unwrap().unwrap().target,
            "https://example.com"
        );

        backend.remove("redis-test").await.unwrap();
        backend.remove("redis-test").await.unwrap();
        assert_eq!(backend.get("redis-test").await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore]
    async fn test_unreachable_server_fails_construction() {
        let result = RedisBackend::new("redis://127.0.0.1:1/").await;
        assert!(result.is_err());
    }
}
