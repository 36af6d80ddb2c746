//! Redis-backed store with separate logical databases for mappings and the
//! visit counter.

use crate::domain::entities::NewMapping;
use crate::domain::repositories::{StoreError, StoreHealth, StoreResult, UrlStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};
use url::Url;

/// Redis implementation of [`UrlStore`].
///
/// Holds one `ConnectionManager` per logical database. Every operation clones
/// its own handle from the manager, so a request never shares a connection
/// object with another request.
pub struct RedisUrlStore {
    mappings: ConnectionManager,
    counters: ConnectionManager,
}

impl RedisUrlStore {
    /// Connects to both logical databases and validates each with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Base connection string (e.g., `"redis://localhost:6379"`);
    ///   any database path in it is replaced
    /// - `mapping_db` - Logical DB holding short code → URL entries
    /// - `counter_db` - Logical DB holding the visit counter
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, a connection
    /// cannot be established, or a PING fails.
    pub async fn connect(redis_url: &str, mapping_db: i64, counter_db: i64) -> StoreResult<Self> {
        let mappings = open_manager(redis_url, mapping_db).await?;
        let counters = open_manager(redis_url, counter_db).await?;

        info!(mapping_db, counter_db, "✓ Connected to Redis");

        Ok(Self { mappings, counters })
    }
}

/// Rewrites the database path of a Redis URL.
///
/// `redis://:pw@host:6379/0` with `db = 1` becomes `redis://:pw@host:6379/1`.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] if `redis_url` does not parse.
pub fn with_database(redis_url: &str, db: i64) -> StoreResult<String> {
    let mut url = Url::parse(redis_url)
        .map_err(|e| StoreError::Connection(format!("Invalid Redis URL: {}", e)))?;
    url.set_path(&format!("/{}", db));
    Ok(url.to_string())
}

async fn open_manager(redis_url: &str, db: i64) -> StoreResult<ConnectionManager> {
    let target = with_database(redis_url, db)?;

    let client = Client::open(target.as_str()).map_err(|e| {
        StoreError::Connection(format!("Failed to create Redis client: {}", e))
    })?;

    let manager = ConnectionManager::new(client).await.map_err(|e| {
        StoreError::Connection(format!("Failed to connect to Redis db {}: {}", db, e))
    })?;

    let mut probe = manager.clone();
    probe
        .ping::<()>()
        .await
        .map_err(|e| StoreError::Connection(format!("Redis PING failed on db {}: {}", db, e)))?;

    Ok(manager)
}

fn operation_error(e: redis::RedisError) -> StoreError {
    StoreError::Operation(e.to_string())
}

#[async_trait]
impl UrlStore for RedisUrlStore {
    async fn get_mapping(&self, code: &str) -> StoreResult<Option<String>> {
        let mut conn = self.mappings.clone();

        let url = conn
            .get::<_, Option<String>>(code)
            .await
            .map_err(operation_error)?;

        match &url {
            Some(url) => debug!("Mapping HIT: {} -> {}", code, url),
            None => debug!("Mapping MISS: {}", code),
        }

        Ok(url)
    }

    async fn insert_mapping(&self, mapping: NewMapping) -> StoreResult<bool> {
        let mut conn = self.mappings.clone();

        let mut cmd = redis::cmd("SET");
        cmd.arg(&mapping.code).arg(&mapping.original_url).arg("NX");
        if let Some(ttl) = mapping.ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }

        let reply: Option<String> = cmd.query_async(&mut conn).await.map_err(operation_error)?;
        let inserted = reply.is_some();

        if inserted {
            debug!(
                "Mapping SET: {} -> {} (TTL: {:?})",
                mapping.code, mapping.original_url, mapping.ttl
            );
        } else {
            debug!("Mapping SET skipped, {} already exists", mapping.code);
        }

        Ok(inserted)
    }

    async fn increment_counter(&self, name: &str) -> StoreResult<i64> {
        let mut conn = self.counters.clone();
        conn.incr::<_, _, i64>(name, 1)
            .await
            .map_err(operation_error)
    }

    async fn get_counter(&self, name: &str) -> StoreResult<i64> {
        let mut conn = self.counters.clone();
        let value = conn
            .get::<_, Option<i64>>(name)
            .await
            .map_err(operation_error)?;
        Ok(value.unwrap_or(0))
    }

    async fn reset_counter(&self, name: &str) -> StoreResult<()> {
        let mut conn = self.counters.clone();
        conn.set::<_, _, ()>(name, 0_i64)
            .await
            .map_err(operation_error)
    }

    async fn ping(&self) -> StoreHealth {
        let mut mappings = self.mappings.clone();
        let mut counters = self.counters.clone();

        let mapping = mappings.ping::<()>().await;
        let counter = counters.ping::<()>().await;

        if let Err(e) = &mapping {
            warn!("Redis PING failed on mapping db: {}", e);
        }
        if let Err(e) = &counter {
            warn!("Redis PING failed on counter db: {}", e);
        }

        StoreHealth {
            mapping: mapping.is_ok(),
            counter: counter.is_ok(),
        }
    }
}
