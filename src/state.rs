//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CounterService, ResolverService, ShortenerService};
use crate::config::Config;
use crate::domain::repositories::UrlStore;

/// State shared by all handlers.
///
/// Built once at startup from the validated [`Config`] and the selected
/// store; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn UrlStore>,
    pub shortener: Arc<ShortenerService>,
    pub resolver: Arc<ResolverService>,
    pub counter: Arc<CounterService>,
}

impl AppState {
    /// Wires the services around `store`.
    pub fn new(config: Config, store: Arc<dyn UrlStore>) -> Self {
        let counter = Arc::new(CounterService::new(store.clone()));
        let resolver = Arc::new(ResolverService::new(
            store.clone(),
            counter.clone(),
            config.counter_key.clone(),
        ));
        let shortener = Arc::new(ShortenerService::new(
            store.clone(),
            config.domain.clone(),
            config.default_expiry_hours,
        ));

        Self {
            config: Arc::new(config),
            store,
            shortener,
            resolver,
            counter,
        }
    }
}
