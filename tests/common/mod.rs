#![allow(dead_code)]

use async_trait::async_trait;
use kv_shortener::config::{Config, StoreBackend};
use kv_shortener::domain::entities::NewMapping;
use kv_shortener::domain::repositories::{StoreError, StoreHealth, StoreResult, UrlStore};
use kv_shortener::infrastructure::store::InMemoryUrlStore;
use kv_shortener::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const COUNTER_KEY: &str = "counter";
pub const DOMAIN: &str = "http://localhost:3000";

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        store_backend: StoreBackend::Memory,
        redis_url: "redis://127.0.0.1:6379".to_string(),
        mapping_db: 0,
        counter_db: 1,
        counter_key: COUNTER_KEY.to_string(),
        domain: DOMAIN.to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        default_expiry_hours: 0,
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}

/// State backed by a fresh in-memory store. The store handle is returned so
/// tests can seed mappings and inspect the counter.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlStore>) {
    let store = Arc::new(InMemoryUrlStore::new());
    let state = AppState::new(test_config(), store.clone());
    (state, store)
}

pub async fn create_test_mapping(store: &InMemoryUrlStore, code: &str, url: &str) {
    let inserted = store
        .insert_mapping(NewMapping::new(code, url))
        .await
        .unwrap();
    assert!(inserted, "code {code} already exists");
}

/// Waits for the background counter increment to land.
pub async fn wait_for_counter(store: &InMemoryUrlStore, expected: i64) -> i64 {
    let mut value = 0;
    for _ in 0..100 {
        value = store.get_counter(COUNTER_KEY).await.unwrap();
        if value == expected {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    value
}

/// A store whose every operation fails, counting increment attempts.
#[derive(Default)]
pub struct UnreachableStore {
    pub increments: AtomicUsize,
}

impl UnreachableStore {
    pub fn increment_attempts(&self) -> usize {
        self.increments.load(Ordering::SeqCst)
    }
}

fn refused() -> StoreError {
    StoreError::Connection("Connection refused (os error 111)".to_string())
}

#[async_trait]
impl UrlStore for UnreachableStore {
    async fn get_mapping(&self, _code: &str) -> StoreResult<Option<String>> {
        Err(refused())
    }

    async fn insert_mapping(&self, _mapping: NewMapping) -> StoreResult<bool> {
        Err(refused())
    }

    async fn increment_counter(&self, _name: &str) -> StoreResult<i64> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        Err(refused())
    }

    async fn get_counter(&self, _name: &str) -> StoreResult<i64> {
        Err(refused())
    }

    async fn reset_counter(&self, _name: &str) -> StoreResult<()> {
        Err(refused())
    }

    async fn ping(&self) -> StoreHealth {
        StoreHealth {
            mapping: false,
            counter: false,
        }
    }
}

/// Mappings resolve, but the counter partition is down.
pub struct CounterDownStore {
    pub inner: InMemoryUrlStore,
}

#[async_trait]
impl UrlStore for CounterDownStore {
    async fn get_mapping(&self, code: &str) -> StoreResult<Option<String>> {
        self.inner.get_mapping(code).await
    }

    async fn insert_mapping(&self, mapping: NewMapping) -> StoreResult<bool> {
        self.inner.insert_mapping(mapping).await
    }

    async fn increment_counter(&self, _name: &str) -> StoreResult<i64> {
        Err(refused())
    }

    async fn get_counter(&self, _name: &str) -> StoreResult<i64> {
        Err(refused())
    }

    async fn reset_counter(&self, _name: &str) -> StoreResult<()> {
        Err(refused())
    }

    async fn ping(&self) -> StoreHealth {
        StoreHealth {
            mapping: true,
            counter: false,
        }
    }
}

pub fn unreachable_state() -> (AppState, Arc<UnreachableStore>) {
    let store = Arc::new(UnreachableStore::default());
    let state = AppState::new(test_config(), store.clone());
    (state, store)
}
