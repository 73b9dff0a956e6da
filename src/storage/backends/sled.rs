use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::{GolinksError, Result};
use crate::storage::{Backend, Link};

/// Embedded backend over a local sled tree.
///
/// Keys are raw keyword bytes and values are raw target bytes in a single
/// flat keyspace, so the data directory holds exactly one key-value pair per
/// link. sled takes an exclusive lock on the directory, which limits this
/// backend to one process; in-process concurrent access is serialized by
/// sled itself.
pub struct SledBackend {
    db: sled::Db,
}

impl SledBackend {
    /// Open (or create) the store rooted at `path`. Fails fast when the
    /// directory is unusable or another process holds the lock.
    pub fn new(path: &str) -> Result<Self> {
        let db = sled::open(path).map_err(|e| {
            GolinksError::backend_connection(format!(
                "Failed to open sled database at '{}': {}",
                path, e
            ))
        })?;

        debug!("Sled database opened at '{}'", path);
        Ok(SledBackend { db })
    }

    fn decode(keyword: &[u8], target: &[u8]) -> Result<Link> {
        let keyword = std::str::from_utf8(keyword)
            .map_err(|e| GolinksError::serialization(format!("Invalid keyword bytes: {}", e)))?;
        let target = std::str::from_utf8(target)
            .map_err(|e| GolinksError::serialization(format!("Invalid target bytes: {}", e)))?;
        Ok(Link::new(keyword, target))
    }
}

#[async_trait]
impl Backend for SledBackend {
    fn backend_name(&self) -> &'static str {
        "sled"
    }

    async fn get(&self, keyword: &str) -> Result<Option<Link>> {
        match self.db.get(keyword.as_bytes())? {
            Some(value) => Ok(Some(Self::decode(keyword.as_bytes(), &value)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, link: Link) -> Result<()> {
        self.db
            .insert(link.keyword.as_bytes(), link.target.as_bytes())?;
        self.db.flush_async().await?;
        Ok(())
    }

    async fn remove(&self, keyword: &str) -> Result<()> {
        // sled returns the previous value; an absent key is not an error
        self.db.remove(keyword.as_bytes())?;
        self.db.flush_async().await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Link>> {
        let mut links = Vec::new();
        // Full scan, lexicographic by keyword. Callers must not rely on the
        // ordering; it is a side effect of sled's key layout.
        for entry in self.db.iter() {
            let (keyword, target) = entry?;
            links.push(Self::decode(&keyword, &target)?);
        }
        Ok(links)
    }

    async fn close(&self) -> Result<()> {
        if let Err(e) = self.db.flush_async().await {
            warn!("Failed to flush sled database on close: {}", e);
            return Err(e.into());
        }
        Ok(())
    }
}
