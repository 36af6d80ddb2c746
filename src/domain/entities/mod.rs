//! Core domain entities.
//!
//! - [`ShortUrlMapping`] - A stored short code → original URL mapping
//! - [`NewMapping`] - Input for writing a mapping to the store

pub mod mapping;

pub use mapping::{NewMapping, ShortUrlMapping};
