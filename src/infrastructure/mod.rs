//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the domain's
//! [`crate::domain::repositories::UrlStore`] trait.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory store backends

pub mod store;
