//! Validation and canonicalisation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is refused.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URLs on this service's own domain cannot be shortened")]
    OwnDomain,
}

/// Normalizes a URL to a canonical form.
///
/// # Rules
///
/// 1. Only `http` and `https` are accepted
/// 2. A host is required
/// 3. Hostname is lowercased
/// 4. Default ports (80, 443) are removed
/// 5. Fragments are removed
/// 6. Path and query are preserved as-is
///
/// # Errors
///
/// Returns [`UrlError::InvalidFormat`] for unparsable input,
/// [`UrlError::UnsupportedProtocol`] for other schemes (`javascript:`,
/// `data:`, `ftp:` ...) and [`UrlError::MissingHost`] when there is no host.
pub fn normalize_url(input: &str) -> Result<String, UrlError> {
    let mut url = Url::parse(input.trim()).map_err(|e| UrlError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlError::UnsupportedProtocol);
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlError::MissingHost)?
        .to_ascii_lowercase();
    url.set_host(Some(&host))
        .map_err(|e| UrlError::InvalidFormat(e.to_string()))?;

    url.set_fragment(None);

    // `Url` already drops a port equal to the scheme default on parse, this
    // covers hosts rewritten above.
    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        url.set_port(None)
            .map_err(|_| UrlError::InvalidFormat("cannot remove default port".to_string()))?;
    }

    Ok(url.to_string())
}

/// Rejects URLs whose host is the shortener's own host.
///
/// `base_url` is the configured short-URL domain. Hosts are compared
/// case-insensitively with one leading `www.` removed. Explicit ports must
/// match; the default http and https ports count as the same site, so
/// `http://sho.rt` and `https://sho.rt` are both the service itself while
/// `localhost:8080` is foreign to `localhost:3000`.
pub fn ensure_foreign_domain(url: &str, base_url: &str) -> Result<(), UrlError> {
    let (Ok(target), Ok(base)) = (Url::parse(url), Url::parse(base_url)) else {
        return Ok(());
    };

    let site = |u: &Url| {
        u.host_str().map(|h| {
            let h = h.to_ascii_lowercase();
            let host = h.strip_prefix("www.").map(str::to_string).unwrap_or(h);
            (host, u.port())
        })
    };

    match (site(&target), site(&base)) {
        (Some(t), Some(b)) if t == b => Err(UrlError::OwnDomain),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalize_uppercase_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_remove_default_port() {
        assert_eq!(
            normalize_url("https://example.com:443/path").unwrap(),
            "https://example.com/path"
        );
        assert_eq!(
            normalize_url("http://example.com:80/path").unwrap(),
            "http://example.com/path"
        );
    }

    #[test]
    fn test_normalize_keep_custom_port() {
        assert_eq!(
            normalize_url("http://example.com:8080/path").unwrap(),
            "http://example.com:8080/path"
        );
    }

    #[test]
    fn test_normalize_remove_fragment_keep_query() {
        assert_eq!(
            normalize_url("https://example.com/page?a=1&b=2#section").unwrap(),
            "https://example.com/page?a=1&b=2"
        );
    }

    #[test]
    fn test_normalize_long_path_untouched() {
        assert_eq!(
            normalize_url("https://example.com/very/long/path").unwrap(),
            "https://example.com/very/long/path"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/x  ").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_normalize_invalid_url() {
        assert!(matches!(
            normalize_url("not-a-url"),
            Err(UrlError::InvalidFormat(_))
        ));
        assert!(matches!(normalize_url(""), Err(UrlError::InvalidFormat(_))));
    }

    #[test]
    fn test_normalize_rejects_other_protocols() {
        for input in [
            "javascript:alert(1)",
            "data:text/plain,hello",
            "ftp://example.com/file",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                normalize_url(input),
                Err(UrlError::UnsupportedProtocol),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_own_domain_rejected() {
        assert_eq!(
            ensure_foreign_domain("http://localhost:3000/abc", "http://localhost:3000"),
            Err(UrlError::OwnDomain)
        );
        assert_eq!(
            ensure_foreign_domain("https://www.sho.rt/x", "https://sho.rt"),
            Err(UrlError::OwnDomain)
        );
    }

    #[test]
    fn test_foreign_domain_accepted() {
        assert!(ensure_foreign_domain("https://example.com/", "https://sho.rt").is_ok());
        assert!(ensure_foreign_domain("https://sho.rt.example.com/", "https://sho.rt").is_ok());
    }

    #[test]
    fn test_own_domain_across_schemes() {
        assert_eq!(
            ensure_foreign_domain("http://sho.rt/x", "https://sho.rt"),
            Err(UrlError::OwnDomain)
        );
    }

    #[test]
    fn test_other_port_is_foreign() {
        assert!(
            ensure_foreign_domain("http://localhost:8080/app", "http://localhost:3000").is_ok()
        );
        assert!(ensure_foreign_domain("http://localhost/app", "http://localhost:3000").is_ok());
    }

    #[test]
    fn test_only_one_www_prefix_stripped() {
        assert!(ensure_foreign_domain("https://www.www.sho.rt/x", "https://sho.rt").is_ok());
        assert_eq!(
            ensure_foreign_domain("https://WWW.sho.rt/x", "https://sho.rt"),
            Err(UrlError::OwnDomain)
        );
    }
}
