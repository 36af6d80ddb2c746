//! Visit counter service.

use std::sync::Arc;

use crate::domain::repositories::UrlStore;
use crate::error::AppError;

/// Counter operations backed by the store's atomic increment.
///
/// Constructed once at startup and shared, so callers never build their own
/// store handles for counting.
pub struct CounterService {
    store: Arc<dyn UrlStore>,
}

impl CounterService {
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }

    /// Increments `key` by one and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the counter partition fails.
    pub async fn increment(&self, key: &str) -> Result<i64, AppError> {
        Ok(self.store.increment_counter(key).await?)
    }

    /// Current value of `key`; 0 if it was never incremented.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the counter partition fails.
    pub async fn current(&self, key: &str) -> Result<i64, AppError> {
        Ok(self.store.get_counter(key).await?)
    }

    /// Sets `key` back to 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the counter partition fails.
    pub async fn reset(&self, key: &str) -> Result<(), AppError> {
        Ok(self.store.reset_counter(key).await?)
    }
}
