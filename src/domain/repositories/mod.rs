//! Repository trait definitions for the domain layer.
//!
//! The key-value store is split into two logical partitions: one holding
//! short code → URL mappings and one holding the global visit counter. Both
//! are reached through the single [`UrlStore`] trait so services depend on an
//! abstraction rather than on raw client handles.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::store::RedisUrlStore`] - Redis, one logical DB per partition
//! - [`crate::infrastructure::store::InMemoryUrlStore`] - Process-local backend
//! - Test mocks available with `cfg(test)`

pub mod url_store;

pub use url_store::{StoreError, StoreHealth, StoreResult, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
