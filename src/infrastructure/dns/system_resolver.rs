//! Resolver backed by the operating system's name service.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

use crate::domain::resolver::HostResolver;

/// Resolves names with the platform resolver (`getaddrinfo`).
///
/// Tokio runs the lookup on its blocking thread pool, so a slow name server
/// does not stall the async workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addresses = tokio::net::lookup_host((host, 0)).await?;
        Ok(addresses.map(|addr| addr.ip()).collect())
    }
}
