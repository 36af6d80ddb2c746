//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::MAX_EXPIRY_HOURS;
use crate::domain::entities::ShortUrlMapping;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"), length(max = 2048))]
    pub url: String,

    /// Optional custom short code. Rules are enforced by the shortener.
    pub short: Option<String>,

    /// Optional expiry in hours. Falls back to the configured default.
    #[validate(range(min = 1, max = MAX_EXPIRY_HOURS))]
    pub expiry: Option<u64>,
}

/// Result of a successful shorten call.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Normalized original URL.
    pub url: String,
    /// Full short URL to hand out.
    pub short: String,
    pub code: String,
    /// Hours until the mapping expires, omitted when it never does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

impl ShortenResponse {
    pub fn new(mapping: ShortUrlMapping, short_url: String) -> Self {
        Self {
            expiry: mapping.expiry_hours(),
            url: mapping.original_url,
            short: short_url,
            code: mapping.code,
        }
    }
}
