//! Short link creation service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::MAX_EXPIRY_HOURS;
use crate::domain::entities::{NewMapping, ShortUrlMapping};
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::{ensure_foreign_domain, normalize_url};

/// Input for [`ShortenerService::shorten`].
#[derive(Debug, Clone, Default)]
pub struct ShortenCommand {
    pub url: String,
    pub custom_code: Option<String>,
    /// Overrides the configured default expiry.
    pub expiry_hours: Option<u64>,
}

impl ShortenCommand {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Service for creating short URL mappings.
///
/// Mappings are written with set-if-absent semantics: a generated code that
/// collides is regenerated, a taken custom code is a conflict, and an existing
/// mapping is never overwritten.
pub struct ShortenerService {
    store: Arc<dyn UrlStore>,
    base_url: String,
    default_expiry_hours: u64,
}

impl ShortenerService {
    /// Creates a new shortener.
    ///
    /// - `base_url` - Domain prepended to codes (e.g., `https://sho.rt`)
    /// - `default_expiry_hours` - TTL used when a request sets none, 0 = never
    pub fn new(store: Arc<dyn UrlStore>, base_url: impl Into<String>, default_expiry_hours: u64) -> Self {
        Self {
            store,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_expiry_hours,
        }
    }

    /// Shortens a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - the URL is malformed, not http(s), or points at this service
    /// - the custom code is invalid
    /// - the expiry exceeds one year
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    /// Returns [`AppError::StoreUnavailable`] if the mapping partition fails.
    pub async fn shorten(&self, command: ShortenCommand) -> Result<ShortUrlMapping, AppError> {
        let original_url = normalize_url(&command.url)
            .map_err(|e| AppError::bad_request(e.to_string()))?;
        ensure_foreign_domain(&original_url, &self.base_url)
            .map_err(|e| AppError::bad_request(e.to_string()))?;

        let ttl = self.resolve_ttl(command.expiry_hours)?;

        let mapping = match command.custom_code {
            Some(custom) => self.insert_custom(custom, original_url, ttl).await?,
            None => self.insert_generated(original_url, ttl).await?,
        };

        info!(code = %mapping.code, url = %mapping.original_url, "Short URL created");

        Ok(mapping)
    }

    /// Full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    fn resolve_ttl(&self, requested_hours: Option<u64>) -> Result<Option<Duration>, AppError> {
        let hours = requested_hours.unwrap_or(self.default_expiry_hours);

        if hours > MAX_EXPIRY_HOURS {
            return Err(AppError::bad_request(format!(
                "Expiry must be at most {} hours",
                MAX_EXPIRY_HOURS
            )));
        }

        Ok((hours > 0).then(|| Duration::from_secs(hours * 3600)))
    }

    async fn insert_custom(
        &self,
        code: String,
        original_url: String,
        ttl: Option<Duration>,
    ) -> Result<ShortUrlMapping, AppError> {
        validate_custom_code(&code)?;

        let new_mapping = NewMapping::new(code, original_url).with_ttl(ttl);
        if !self.store.insert_mapping(new_mapping.clone()).await? {
            return Err(AppError::conflict("URL custom short is already in use"));
        }

        Ok(new_mapping.into())
    }

    /// Writes a mapping under a fresh random code, retrying on collision.
    ///
    /// Attempts up to 10 times before failing.
    async fn insert_generated(
        &self,
        original_url: String,
        ttl: Option<Duration>,
    ) -> Result<ShortUrlMapping, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for attempt in 1..=MAX_ATTEMPTS {
            let new_mapping = NewMapping::new(generate_code()?, original_url.clone()).with_ttl(ttl);

            if self.store.insert_mapping(new_mapping.clone()).await? {
                return Ok(new_mapping.into());
            }

            debug!(code = %new_mapping.code, attempt, "Generated code collided");
        }

        Err(AppError::internal(
            "Failed to generate unique code: too many collisions",
        ))
    }
}
