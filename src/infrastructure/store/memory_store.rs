//! Process-local store for development and tests.

use crate::domain::entities::NewMapping;
use crate::domain::repositories::{StoreHealth, StoreResult, UrlStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Map size at which an insert sweeps out expired mappings.
const PURGE_THRESHOLD: usize = 1024;

#[derive(Debug, Clone)]
struct Entry {
    original_url: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// A [`UrlStore`] that keeps both partitions in memory.
///
/// Honours mapping TTLs on read; expired mappings are swept on insert once
/// the map reaches [`PURGE_THRESHOLD`]. Data does not survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    mappings: Mutex<HashMap<String, Entry>>,
    counters: Mutex<HashMap<String, i64>>,
}

impl InMemoryUrlStore {
    pub fn new() -> Self {
        debug!("Using InMemoryUrlStore");
        Self::default()
    }

    /// Number of live (non-expired) mappings.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.mappings
            .lock()
            .await
            .values()
            .filter(|e| !e.is_expired(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn get_mapping(&self, code: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let mut mappings = self.mappings.lock().await;

        match mappings.get(code) {
            Some(entry) if entry.is_expired(now) => {
                mappings.remove(code);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.original_url.clone())),
            None => Ok(None),
        }
    }

    async fn insert_mapping(&self, mapping: NewMapping) -> StoreResult<bool> {
        let now = Instant::now();
        let mut mappings = self.mappings.lock().await;

        if mappings.len() >= PURGE_THRESHOLD {
            let before = mappings.len();
            mappings.retain(|_, entry| !entry.is_expired(now));
            debug!(purged = before - mappings.len(), "Expired mappings purged");
        }

        if mappings
            .get(&mapping.code)
            .is_some_and(|existing| !existing.is_expired(now))
        {
            return Ok(false);
        }

        mappings.insert(
            mapping.code,
            Entry {
                original_url: mapping.original_url,
                expires_at: mapping.ttl.map(|ttl| now + ttl),
            },
        );

        Ok(true)
    }

    async fn increment_counter(&self, name: &str) -> StoreResult<i64> {
        let mut counters = self.counters.lock().await;
        let value = counters.entry(name.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn get_counter(&self, name: &str) -> StoreResult<i64> {
        Ok(self.counters.lock().await.get(name).copied().unwrap_or(0))
    }

    async fn reset_counter(&self, name: &str) -> StoreResult<()> {
        self.counters.lock().await.insert(name.to_string(), 0);
        Ok(())
    }

    async fn ping(&self) -> StoreHealth {
        StoreHealth {
            mapping: true,
            counter: true,
        }
    }
}
