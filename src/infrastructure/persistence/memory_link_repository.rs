//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link storage.
///
/// Codes come from an atomic counter that is independent of the map, so
/// concurrent allocations always get distinct codes. `DashMap` shards its
/// locks, letting lookups run alongside inserts to other buckets.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    last_code: AtomicI64,
    links: DashMap<i64, String>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository; the first allocated code is `1`.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn allocate(&self, original_url: &str) -> Result<Link, AppError> {
        let code = self.last_code.fetch_add(1, Ordering::SeqCst) + 1;
        self.links.insert(code, original_url.to_owned());

        Ok(Link::new(code, original_url))
    }

    async fn find_by_code(&self, code: i64) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .get(&code)
            .map(|entry| Link::new(code, entry.value().clone())))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }
}
