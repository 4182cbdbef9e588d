//! Repository trait for short link storage and code allocation.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for short links.
///
/// The repository owns the allocation of short codes. Codes start at `1`,
/// increase by one per allocation and are never handed out twice, including
/// when allocations run concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Assigns the next short code to `original_url` and persists the pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationFailed`] if no unique code could be
    /// obtained within the configured number of attempts.
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn allocate(&self, original_url: &str) -> Result<Link, AppError>;

    /// Finds a link by its exact short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if no record holds `code` (including zero and negative values)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_code(&self, code: i64) -> Result<Option<Link>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
