//! Short code resolution and visit recording.

use std::sync::Arc;

use tracing::{debug, warn};

use super::CounterService;
use crate::domain::repositories::UrlStore;
use crate::error::{AppError, NOT_FOUND_MESSAGE};

/// Resolves short codes and records visits on the global counter.
pub struct ResolverService {
    store: Arc<dyn UrlStore>,
    counter: Arc<CounterService>,
    counter_key: String,
}

impl ResolverService {
    /// Creates a resolver that counts visits under `counter_key`.
    pub fn new(
        store: Arc<dyn UrlStore>,
        counter: Arc<CounterService>,
        counter_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            counter,
            counter_key: counter_key.into(),
        }
    }

    /// Looks up the original URL for `code`.
    ///
    /// Never touches the counter; see [`Self::record_visit`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code has no mapping.
    /// Returns [`AppError::StoreUnavailable`] if the mapping partition fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.store
            .get_mapping(code)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Increments the visit counter, best-effort.
    ///
    /// A failure is logged and dropped: the redirect has already been decided
    /// and must not depend on counter bookkeeping. Returns the new value when
    /// the increment went through.
    pub async fn record_visit(&self) -> Option<i64> {
        match self.counter.increment(&self.counter_key).await {
            Ok(visits) => {
                debug!(counter = %self.counter_key, visits, "Visit recorded");
                Some(visits)
            }
            Err(e) => {
                warn!(counter = %self.counter_key, error = ?e, "Failed to record visit");
                None
            }
        }
    }
}
