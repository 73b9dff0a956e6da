pub mod source;

pub use source::{resolve_host, source_url};

/// Check that a keyword is non-empty and URL-path-safe (unreserved
/// characters only). Anything stricter is deliberately left to deployment
/// policy.
pub fn is_valid_keyword(keyword: &str) -> bool {
    !keyword.is_empty()
        && keyword
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'))
}
