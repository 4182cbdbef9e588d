//! Validation of candidate URLs before they are shortened.
//!
//! A candidate is accepted when it parses as an absolute `http`/`https` URL
//! and its host resolves within a bounded time.

use std::sync::Arc;
use std::time::Duration;

use url::{Host, Url};

use crate::domain::resolver::HostResolver;
use crate::error::AppError;

/// Default bound on a single host lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Reasons a candidate URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlRejection {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    Malformed(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got `{0}`")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Host `{host}` did not resolve: {reason}")]
    Unresolvable { host: String, reason: String },

    #[error("Lookup of `{host}` timed out after {timeout_ms}ms")]
    LookupTimedOut { host: String, timeout_ms: u128 },
}

impl UrlRejection {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UrlRejection::Empty | UrlRejection::Malformed(_) | UrlRejection::MissingHost => {
                "syntax"
            }
            UrlRejection::UnsupportedScheme(_) => "scheme",
            UrlRejection::Unresolvable { .. } => "unresolvable",
            UrlRejection::LookupTimedOut { .. } => "timeout",
        }
    }
}

impl From<UrlRejection> for AppError {
    fn from(rejection: UrlRejection) -> Self {
        AppError::invalid_url(rejection.to_string())
    }
}

/// Outcome of a bounded host lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostResolution {
    /// The host has at least one address; holds the number of addresses.
    Resolved(usize),
    /// The lookup did not finish within the configured bound.
    TimedOut,
    /// The lookup failed or returned no addresses.
    Failed(String),
}

/// Parses `candidate` as an absolute HTTP(S) URL.
///
/// Surrounding whitespace is ignored. The scheme check is case-insensitive
/// because the parser lowercases schemes.
///
/// # Errors
///
/// Returns [`UrlRejection::Empty`] for blank input,
/// [`UrlRejection::Malformed`] when parsing fails (including relative and
/// scheme-less strings), [`UrlRejection::UnsupportedScheme`] for anything
/// other than `http`/`https` and [`UrlRejection::MissingHost`] when the URL
/// has no host.
///
/// Control characters are rejected outright. The parser would strip or
/// percent-encode them, leaving a stored string that differs from the parsed
/// URL and cannot be sent back in a `Location` header.
pub fn parse_candidate(candidate: &str) -> Result<Url, UrlRejection> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(UrlRejection::Empty);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(UrlRejection::Malformed(
            "URL contains control characters".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlRejection::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlRejection::UnsupportedScheme(other.to_string())),
    }

    if url.host().is_none() {
        return Err(UrlRejection::MissingHost);
    }

    Ok(url)
}

/// Validates candidate URLs: syntax first, then host resolvability.
pub struct UrlValidator<R: HostResolver + ?Sized = dyn HostResolver> {
    resolver: Arc<R>,
    lookup_timeout: Duration,
}

impl<R: HostResolver + ?Sized> UrlValidator<R> {
    /// Creates a validator that bounds each host lookup by `lookup_timeout`.
    pub fn new(resolver: Arc<R>, lookup_timeout: Duration) -> Self {
        Self {
            resolver,
            lookup_timeout,
        }
    }

    /// Validates `candidate` and returns the URL string to store.
    ///
    /// The returned string is the caller's input with surrounding whitespace
    /// removed; it is not normalized.
    ///
    /// # Errors
    ///
    /// Any syntax rejection from [`parse_candidate`], plus
    /// [`UrlRejection::Unresolvable`] and [`UrlRejection::LookupTimedOut`]
    /// when the host does not resolve in time.
    pub async fn validate(&self, candidate: &str) -> Result<String, UrlRejection> {
        let url = parse_candidate(candidate)?;
        let host = url.host().ok_or(UrlRejection::MissingHost)?;

        match self.resolve_host(&host).await {
            HostResolution::Resolved(addresses) => {
                tracing::debug!(%host, addresses, "host resolved");
                Ok(candidate.trim().to_string())
            }
            HostResolution::TimedOut => Err(UrlRejection::LookupTimedOut {
                host: host.to_string(),
                timeout_ms: self.lookup_timeout.as_millis(),
            }),
            HostResolution::Failed(reason) => Err(UrlRejection::Unresolvable {
                host: host.to_string(),
                reason,
            }),
        }
    }

    /// Resolves `host` within the configured timeout.
    ///
    /// IP literals resolve to themselves and never reach the resolver.
    pub async fn resolve_host(&self, host: &Host<&str>) -> HostResolution {
        let domain = match host {
            Host::Domain(domain) => *domain,
            Host::Ipv4(_) | Host::Ipv6(_) => return HostResolution::Resolved(1),
        };

        match tokio::time::timeout(self.lookup_timeout, self.resolver.lookup(domain)).await {
            Err(_) => HostResolution::TimedOut,
            Ok(Err(e)) => HostResolution::Failed(e.to_string()),
            Ok(Ok(addresses)) if addresses.is_empty() => {
                HostResolution::Failed("no addresses returned".to_string())
            }
            Ok(Ok(addresses)) => HostResolution::Resolved(addresses.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::MockHostResolver;
    use async_trait::async_trait;
    use std::io;
    use std::net::{IpAddr, Ipv4Addr};

    fn resolving_to(addr: [u8; 4]) -> MockHostResolver {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .returning(move |_| Ok(vec![IpAddr::V4(Ipv4Addr::from(addr))]));
        resolver
    }

    fn validator(resolver: MockHostResolver) -> UrlValidator<MockHostResolver> {
        UrlValidator::new(Arc::new(resolver), Duration::from_millis(200))
    }

    struct SlowResolver;

    #[async_trait]
    impl HostResolver for SlowResolver {
        async fn lookup(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
        }
    }

    #[test]
    fn test_parse_simple_http() {
        let url = parse_candidate("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_parse_uppercase_scheme() {
        let url = parse_candidate("HTTPS://EXAMPLE.COM/Path").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(parse_candidate(""), Err(UrlRejection::Empty));
        assert_eq!(parse_candidate("   "), Err(UrlRejection::Empty));
    }

    #[test]
    fn test_parse_not_a_url() {
        assert!(matches!(
            parse_candidate("not a url"),
            Err(UrlRejection::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_no_protocol() {
        assert!(matches!(
            parse_candidate("example.com"),
            Err(UrlRejection::Malformed(_))
        ));
        assert!(matches!(
            parse_candidate("/relative/path"),
            Err(UrlRejection::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_ftp_protocol() {
        assert_eq!(
            parse_candidate("ftp://host/x"),
            Err(UrlRejection::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_parse_other_protocols() {
        for candidate in [
            "file:///home/user/document.txt",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    parse_candidate(candidate),
                    Err(UrlRejection::UnsupportedScheme(_))
                ),
                "{candidate} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_missing_host() {
        assert!(parse_candidate("http://").is_err());
    }

    #[test]
    fn test_parse_rejects_control_characters() {
        for candidate in [
            "https://example.com/a\u{1}b",
            "https://exa\nmple.com/",
            "https://example.com/a\tb",
            "https://example.com/\r\nSet-Cookie: x=1",
            "https://example.com/\u{7f}",
        ] {
            assert!(
                matches!(
                    parse_candidate(candidate),
                    Err(UrlRejection::Malformed(_))
                ),
                "{candidate:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_validate_control_characters_skip_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(0);

        let result = validator(resolver)
            .validate("https://example.com/a\u{1}b")
            .await;

        assert!(matches!(result, Err(UrlRejection::Malformed(_))));
    }

    #[tokio::test]
    async fn test_validate_preserves_input() {
        let validator = validator(resolving_to([93, 184, 216, 34]));

        let accepted = validator.validate("https://www.example.com").await.unwrap();

        assert_eq!(accepted, "https://www.example.com");
    }

    #[tokio::test]
    async fn test_validate_trims_surrounding_whitespace() {
        let validator = validator(resolving_to([93, 184, 216, 34]));

        let accepted = validator
            .validate("  https://www.example.com/path?q=1 ")
            .await
            .unwrap();

        assert_eq!(accepted, "https://www.example.com/path?q=1");
    }

    #[tokio::test]
    async fn test_validate_looks_up_the_host_only() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .withf(|host| host == "www.freecodecamp.org")
            .times(1)
            .returning(|_| Ok(vec![IpAddr::V4(Ipv4Addr::new(104, 26, 2, 33))]));

        let result = validator(resolver)
            .validate("https://www.freecodecamp.org:8443/learn?x=1")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validate_syntax_failure_skips_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(0);
        let validator = validator(resolver);

        for candidate in ["", "not a url", "ftp://host/x"] {
            assert!(validator.validate(candidate).await.is_err());
        }
    }

    #[tokio::test]
    async fn test_validate_unresolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(1).returning(|_| {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "failed to lookup address information",
            ))
        });

        let result = validator(resolver)
            .validate("https://no-such-host.invalid")
            .await;

        assert!(matches!(
            result,
            Err(UrlRejection::Unresolvable { ref host, .. }) if host == "no-such-host.invalid"
        ));
    }

    #[tokio::test]
    async fn test_validate_empty_answer_is_unresolvable() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().returning(|_| Ok(Vec::new()));

        let result = validator(resolver).validate("https://example.com").await;

        assert!(matches!(result, Err(UrlRejection::Unresolvable { .. })));
    }

    #[tokio::test]
    async fn test_validate_lookup_timeout_fails_closed() {
        let validator = UrlValidator::new(Arc::new(SlowResolver), Duration::from_millis(20));

        let result = validator.validate("https://slow.example.com").await;

        assert_eq!(
            result,
            Err(UrlRejection::LookupTimedOut {
                host: "slow.example.com".to_string(),
                timeout_ms: 20,
            })
        );
    }

    #[tokio::test]
    async fn test_validate_ip_literal_skips_lookup() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(0);
        let validator = validator(resolver);

        assert!(validator.validate("http://192.168.1.1:8080/api").await.is_ok());
        assert!(validator.validate("http://[::1]:3000/").await.is_ok());
    }

    #[test]
    fn test_rejection_maps_to_invalid_url() {
        let err: AppError = UrlRejection::UnsupportedScheme("ftp".to_string()).into();
        assert!(matches!(err, AppError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejection_kinds() {
        assert_eq!(UrlRejection::Empty.kind(), "syntax");
        assert_eq!(UrlRejection::UnsupportedScheme("ftp".into()).kind(), "scheme");
        assert_eq!(
            UrlRejection::LookupTimedOut {
                host: "a".into(),
                timeout_ms: 1
            }
            .kind(),
            "timeout"
        );
    }
}
