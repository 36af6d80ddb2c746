//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::UrlStore`] trait and
//! give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short code creation
//! - [`services::resolver_service::ResolverService`] - Short code lookup and visit recording
//! - [`services::counter_service::CounterService`] - Global visit counter

pub mod services;
