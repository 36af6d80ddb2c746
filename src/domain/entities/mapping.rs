//! Short URL mapping entity.

use std::time::Duration;

/// A short code and the original URL it redirects to.
///
/// Mappings are immutable once written. They disappear only when the store
/// expires them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlMapping {
    pub code: String,
    pub original_url: String,
    pub expiry: Option<Duration>,
}

impl ShortUrlMapping {
    /// Expiry rounded down to whole hours, as reported to API callers.
    pub fn expiry_hours(&self) -> Option<u64> {
        self.expiry.map(|ttl| ttl.as_secs() / 3600)
    }
}

/// Input data for writing a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub code: String,
    pub original_url: String,
    /// Store-side TTL. `None` keeps the mapping until removed externally.
    pub ttl: Option<Duration>,
}

impl NewMapping {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }
}

impl From<NewMapping> for ShortUrlMapping {
    fn from(new: NewMapping) -> Self {
        Self {
            code: new.code,
            original_url: new.original_url,
            expiry: new.ttl,
        }
    }
}
