//! Domain layer containing the URL mapping model and the store abstraction.
//!
//! # Architecture
//!
//! - [`entities`] - Short URL mappings and their creation input
//! - [`repositories`] - The [`repositories::UrlStore`] trait over the mapping
//!   and counter partitions of the key-value store
//!
//! The domain layer has no dependency on HTTP or on a concrete store client.
//! Implementations live in [`crate::infrastructure::store`].

pub mod entities;
pub mod repositories;
