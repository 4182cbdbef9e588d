#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shorturl::application::services::{LinkService, UrlValidator};
use shorturl::domain::entities::Link;
use shorturl::domain::repositories::LinkRepository;
use shorturl::domain::resolver::HostResolver;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::InMemoryLinkRepository;
use shorturl::routes::router;
use shorturl::state::AppState;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

/// Resolves every host except those under the reserved `.invalid` TLD.
pub struct StubResolver;

#[async_trait]
impl HostResolver for StubResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if host.ends_with(".invalid") {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such host"))
        } else {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))])
        }
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct UnavailableRepository;

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn allocate(&self, _original_url: &str) -> Result<Link, AppError> {
        Err(AppError::StorageUnavailable("connection refused".to_string()))
    }

    async fn find_by_code(&self, _code: i64) -> Result<Option<Link>, AppError> {
        Err(AppError::StorageUnavailable("connection refused".to_string()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::StorageUnavailable("connection refused".to_string()))
    }
}

pub fn create_link_service(repo: Arc<dyn LinkRepository>) -> Arc<LinkService> {
    let resolver: Arc<dyn HostResolver> = Arc::new(StubResolver);
    let validator = UrlValidator::new(resolver, Duration::from_millis(500));

    Arc::new(LinkService::new(repo, validator))
}

pub fn create_test_state_with(repo: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(create_link_service(repo))
}

/// State backed by a fresh in-memory repository.
pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(InMemoryLinkRepository::new()))
}

/// Full application router over a fresh in-memory repository.
pub fn create_test_app() -> Router {
    router(create_test_state())
}
