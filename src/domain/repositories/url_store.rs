//! Repository trait for the mapping and counter partitions.

use crate::domain::entities::NewMapping;
use async_trait::async_trait;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("Store connection error: {0}")]
    Connection(String),

    /// The backend was reached but the command failed.
    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Reachability of each logical partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreHealth {
    pub mapping: bool,
    pub counter: bool,
}

impl StoreHealth {
    pub fn is_healthy(&self) -> bool {
        self.mapping && self.counter
    }
}

/// Repository interface over the two logical stores.
///
/// Implementations must be thread-safe. Single-key increments must be atomic
/// at the store level; the service adds no locking of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Looks up the original URL for a short code in the mapping partition.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code is mapped
    /// - `Ok(None)` if it is not (or has expired)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be queried.
    async fn get_mapping(&self, code: &str) -> StoreResult<Option<String>>;

    /// Writes a mapping only if the code is not taken yet.
    ///
    /// Returns `Ok(false)` when the code already exists; the existing mapping
    /// is left untouched.
    async fn insert_mapping(&self, mapping: NewMapping) -> StoreResult<bool>;

    /// Atomically increments a counter in the counter partition and returns
    /// the new value. A missing counter starts from 0.
    async fn increment_counter(&self, name: &str) -> StoreResult<i64>;

    /// Reads a counter. A missing counter reads as 0.
    async fn get_counter(&self, name: &str) -> StoreResult<i64>;

    /// Sets a counter back to 0.
    async fn reset_counter(&self, name: &str) -> StoreResult<()>;

    /// Checks that both partitions are reachable.
    async fn ping(&self) -> StoreHealth;
}
