//! Business logic services for the application layer.

pub mod counter_service;
pub mod resolver_service;
pub mod shortener_service;

pub use counter_service::CounterService;
pub use resolver_service::ResolverService;
pub use shortener_service::{ShortenCommand, ShortenerService};
