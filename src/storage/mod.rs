use std::sync::Arc;
use tracing::error;

use crate::config::Config;
use crate::errors::{GolinksError, Result};

pub mod backends;
pub mod models;

pub use models::Link;

/// Storage contract shared by every backend. The HTTP layer only ever sees
/// `Arc<dyn Backend>` and must behave identically regardless of the concrete
/// implementation.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Human-readable backend label, used in startup logging.
    fn backend_name(&self) -> &'static str;

    /// Look up a keyword. `Ok(None)` is the normal miss outcome; `Err` is
    /// reserved for actual backend faults (I/O, network).
    async fn get(&self, keyword: &str) -> Result<Option<Link>>;

    /// Create or overwrite the mapping for `link.keyword`.
    async fn set(&self, link: Link) -> Result<()>;

    /// Remove a mapping. Removing an absent keyword is not an error.
    async fn remove(&self, keyword: &str) -> Result<()>;

    /// Enumerate every live mapping exactly once. A point-in-time snapshot
    /// is not guaranteed.
    async fn load_all(&self) -> Result<Vec<Link>>;

    /// Release underlying resources. Called once at process shutdown.
    async fn close(&self) -> Result<()>;
}

pub struct BackendFactory;

impl BackendFactory {
    pub async fn create(config: &Config) -> Result<Arc<dyn Backend>> {
        match config.backend.as_str() {
            "sled" => {
                let backend = backends::sled::SledBackend::new(&config.data)?;
                Ok(Arc::new(backend) as Arc<dyn Backend>)
            }
            "redis" => {
                let backend = backends::redis::RedisBackend::new(&config.redis_url).await?;
                Ok(Arc::new(backend) as Arc<dyn Backend>)
            }
            other => {
                error!("Unknown storage backend: {}", other);
                Err(GolinksError::backend_not_found(format!(
                    "Unknown storage backend: {}. Supported: sled, redis",
                    other
                )))
            }
        }
    }
}
