//! # kv-shortener
//!
//! A small URL shortening service built with Axum on top of a key-value store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entities and the [`domain::repositories::UrlStore`] trait
//! - **Application Layer** ([`application`]) - Shortener, resolver, and counter services
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory store backends
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Storage Layout
//!
//! Two logical databases of one Redis server:
//!
//! - mapping DB (default 0): `code → original URL`
//! - counter DB (default 1): a single visit counter key (default `counter`)
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export DOMAIN="http://localhost:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/api/v1 -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com/very/long/path"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CounterService, ResolverService, ShortenerService};
    pub use crate::domain::entities::{NewMapping, ShortUrlMapping};
    pub use crate::domain::repositories::{StoreError, StoreHealth, UrlStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryUrlStore, RedisUrlStore};
    pub use crate::state::AppState;
}
