//! Host name resolution used by URL validation.

use async_trait::async_trait;
use std::net::IpAddr;

/// Resolves a host name to its addresses.
///
/// Implementations may block on network I/O; callers are expected to bound
/// the lookup with a timeout.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - platform resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Looks up the addresses of `host`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the name cannot be resolved.
    async fn lookup(&self, host: &str) -> std::io::Result<Vec<IpAddr>>;
}
