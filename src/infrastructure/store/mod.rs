//! Key-value store backends.
//!
//! Provides two [`UrlStore`] implementations:
//! - [`RedisUrlStore`] - Production Redis backend, one logical DB per partition
//! - [`InMemoryUrlStore`] - Process-local backend for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryUrlStore;
pub use redis_store::{RedisUrlStore, with_database};

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Builds the store selected by the configuration.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and either logical
/// database cannot be reached.
pub async fn connect(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store =
                RedisUrlStore::connect(&config.redis_url, config.mapping_db, config.counter_db)
                    .await
                    .context("Failed to connect to Redis")?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Ok(Arc::new(InMemoryUrlStore::new()))
        }
    }
}
