//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then shared with
//! every handler through [`crate::state::AppState`]. Nothing reads the
//! environment after startup.
//!
//! ## Store connection
//!
//! ### Method 1: Full URL
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! ```
//!
//! ### Method 2: Individual components
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! ```
//!
//! Mappings live in logical database `MAPPING_DB` (default 0) and the visit
//! counter in `COUNTER_DB` (default 1). Any database path in the URL is
//! replaced per partition.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `APP_PORT` - Port used when `LISTEN` is unset (`3000` or `:3000`)
//! - `STORE_BACKEND` - `redis` or `memory` (default: `redis`)
//! - `COUNTER_KEY` - Name of the visit counter key (default: `counter`)
//! - `DOMAIN` - Base of generated short URLs (default: `http://localhost:3000`)
//! - `CORS_ORIGIN` - Allowed CORS origin, `*` for any (default: `http://localhost:5173`)
//! - `DEFAULT_EXPIRY_HOURS` - TTL applied when a request sets none, 0 = never (default: 0)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::str::FromStr;

/// Longest TTL a mapping may carry, in hours (one year).
pub const MAX_EXPIRY_HOURS: u64 = 8760;

/// Which [`crate::domain::repositories::UrlStore`] implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORE_BACKEND must be 'redis' or 'memory', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub store_backend: StoreBackend,
    pub redis_url: String,
    /// Logical database holding short code → URL mappings.
    pub mapping_db: i64,
    /// Logical database holding the visit counter.
    pub counter_db: i64,
    pub counter_key: String,
    /// Base URL prepended to generated codes, without trailing slash.
    pub domain: String,
    pub cors_origin: String,
    /// TTL applied when a shorten request sets none. 0 disables expiry.
    pub default_expiry_hours: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or
    /// `STORE_BACKEND` is unknown.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let redis_url = Self::load_redis_url();

        let store_backend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "redis".to_string())
            .parse()?;

        let mapping_db = parse_var("MAPPING_DB", 0)?;
        let counter_db = parse_var("COUNTER_DB", 1)?;
        let default_expiry_hours = parse_var("DEFAULT_EXPIRY_HOURS", 0)?;

        let counter_key = env::var("COUNTER_KEY").unwrap_or_else(|_| "counter".to_string());
        let domain = env::var("DOMAIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();
        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            store_backend,
            redis_url,
            mapping_db,
            counter_db,
            counter_key,
            domain,
            cors_origin,
            default_expiry_hours,
            log_level,
            log_format,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN`
    /// 2. `0.0.0.0:{APP_PORT}` (a leading `:` is accepted)
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        match env::var("APP_PORT") {
            Ok(port) => format!("0.0.0.0:{}", port.trim_start_matches(':')),
            Err(_) => "0.0.0.0:3000".to_string(),
        }
    }

    /// Loads the Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`
    /// 3. `redis://127.0.0.1:6379`
    fn load_redis_url() -> String {
        if let Ok(url) = env::var("REDIS_URL") {
            return url;
        }

        let Ok(host) = env::var("REDIS_HOST") else {
            return "redis://127.0.0.1:6379".to_string();
        };
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());

        match env::var("REDIS_PASSWORD") {
            // Empty password means no authentication
            Ok(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}", pwd, host, port),
            _ => format!("redis://{}:{}", host, port),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.store_backend == StoreBackend::Redis
            && !self.redis_url.starts_with("redis://")
            && !self.redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(&self.redis_url)
            );
        }

        if self.mapping_db < 0 || self.counter_db < 0 {
            anyhow::bail!("MAPPING_DB and COUNTER_DB must not be negative");
        }

        if self.mapping_db == self.counter_db {
            anyhow::bail!(
                "MAPPING_DB and COUNTER_DB must differ, both are {}",
                self.mapping_db
            );
        }

        if self.counter_key.is_empty() {
            anyhow::bail!("COUNTER_KEY must not be empty");
        }

        if !self.domain.starts_with("http://") && !self.domain.starts_with("https://") {
            anyhow::bail!(
                "DOMAIN must start with 'http://' or 'https://', got '{}'",
                self.domain
            );
        }

        if self.cors_origin != "*" {
            HeaderValue::from_str(&self.cors_origin).with_context(|| {
                format!("CORS_ORIGIN is not a valid origin: '{}'", self.cors_origin)
            })?;
        }

        if self.default_expiry_hours > MAX_EXPIRY_HOURS {
            anyhow::bail!(
                "DEFAULT_EXPIRY_HOURS must be at most {}, got {}",
                MAX_EXPIRY_HOURS,
                self.default_expiry_hours
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.store_backend {
            StoreBackend::Redis => tracing::info!(
                "  Store: {} (mappings db {}, counter db {})",
                mask_connection_string(&self.redis_url),
                self.mapping_db,
                self.counter_db
            ),
            StoreBackend::Memory => tracing::info!("  Store: in-memory"),
        }
        tracing::info!("  Counter key: {}", self.counter_key);
        tracing::info!("  Short URL domain: {}", self.domain);
        tracing::info!("  CORS origin: {}", self.cors_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// `redis://:password@host:port` → `redis://:***@host:port`
pub fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
