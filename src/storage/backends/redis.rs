use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, trace};

use crate::errors::{GolinksError, Result};
use crate::storage::{Backend, Link};

/// One document per link lives under this prefix, keyed by keyword.
const KEY_PREFIX: &str = "golinks:";

/// Managed backend over a remote redis deployment.
///
/// Unlike the embedded backend, the backing keyspace may be shared by many
/// processes at once; redis handles its own locking and no client-side
/// coordination is performed. Transient network failures surface as backend
/// faults for the caller to retry; this type never retries on its own.
pub struct RedisBackend {
    connection: ConnectionManager,
}

impl RedisBackend {
    /// Connect to the configured redis URL. The connection is verified with
    /// a PING so an unreachable server fails construction instead of the
    /// first request.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| {
            GolinksError::backend_connection(format!("Invalid redis URL '{}': {}", url, e))
        })?;

        let mut connection = client.get_connection_manager().await.map_err(|e| {
            GolinksError::backend_connection(format!("Failed to connect to redis: {}", e))
        })?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut connection)
            .await
            .map_err(|e| {
                GolinksError::backend_connection(format!("Redis ping failed: {}", e))
            })?;
        debug!("Redis connection test successful: {}", pong);

        Ok(RedisBackend { connection })
    }

    fn make_key(keyword: &str) -> String {
        format!("{}{}", KEY_PREFIX, keyword)
    }

    fn serialize_link(link: &Link) -> Result<String> {
        Ok(serde_json::to_string(link)?)
    }

    fn deserialize_link(data: &str) -> Result<Link> {
        Ok(serde_json::from_str(data)?)
    }
}

#[async_trait]
impl Backend for RedisBackend {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, keyword: &str) -> Result<Option<Link>> {
        let mut conn = self.connection.clone();
        let data: Option<String> = conn.get(Self::make_key(keyword)).await?;

        match data {
            Some(data) => {
                trace!("Redis hit for keyword: {}", keyword);
                Ok(Some(Self::deserialize_link(&data)?))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, link: Link) -> Result<()> {
        let mut conn = self.connection.clone();
        let data = Self::serialize_link(&link)?;
        conn.set::<_, _, ()>(Self::make_key(&link.keyword), data)
            .await?;
        Ok(())
    }

    async fn remove(&self, keyword: &str) -> Result<()> {
        let mut conn = self.connection.clone();
        // DEL reports how many keys existed; an absent keyword is still Ok
        let deleted: i64 = conn.del(Self::make_key(keyword)).await?;
        trace!("Redis DEL {} removed {} key(s)", keyword, deleted);
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Link>> {
        let mut conn = self.connection.clone();

        // Cursor-based SCAN over the golinks keyspace. Writes from other
        // processes that land mid-scan may be missed until the store
        // converges; each key still appears at most once per pass.
        let mut keys: Vec<String> = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(format!("{}*", KEY_PREFIX))
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await?;
            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }
        keys.sort();
        keys.dedup();

        let mut links = Vec::with_capacity(keys.len());
        for key in keys {
            // Point read per key; a key deleted between SCAN and GET is
            // simply skipped
            let data: Option<String> = conn.get(&key).await?;
            if let Some(data) = data {
                links.push(Self::deserialize_link(&data)?);
            }
        }
        Ok(links)
    }

    async fn close(&self) -> Result<()> {
        // The multiplexed connection is dropped with the manager; redis
        // needs no explicit teardown
        Ok(())
    }
}
