//! Link creation and resolution service.

use std::sync::Arc;

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::domain::resolver::HostResolver;
use crate::error::AppError;

/// Service for creating and resolving short links.
///
/// Creation validates the candidate URL and then lets the repository
/// allocate the next code. Resolution is a plain lookup. The service keeps
/// no state of its own between calls.
pub struct LinkService<
    L: LinkRepository + ?Sized = dyn LinkRepository,
    R: HostResolver + ?Sized = dyn HostResolver,
> {
    link_repository: Arc<L>,
    validator: UrlValidator<R>,
}

impl<L: LinkRepository + ?Sized, R: HostResolver + ?Sized> LinkService<L, R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, validator: UrlValidator<R>) -> Self {
        Self {
            link_repository,
            validator,
        }
    }

    /// Validates `candidate` and stores it under a newly allocated code.
    ///
    /// Submitting the same URL twice creates two links with different codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is malformed, uses a scheme
    /// other than HTTP(S), or its host does not resolve in time.
    ///
    /// Returns [`AppError::AllocationFailed`] or
    /// [`AppError::StorageUnavailable`] from the repository.
    pub async fn create_short_link(&self, candidate: &str) -> Result<Link, AppError> {
        let original_url = match self.validator.validate(candidate).await {
            Ok(url) => url,
            Err(rejection) => {
                metrics::counter!("shorturl_rejected_urls_total", "reason" => rejection.kind())
                    .increment(1);
                tracing::debug!(%rejection, "candidate url rejected");
                return Err(rejection.into());
            }
        };

        let link = self.link_repository.allocate(&original_url).await?;

        metrics::counter!("shorturl_links_created_total").increment(1);
        tracing::info!(code = link.code, original_url = %link.original_url, "short link created");

        Ok(link)
    }

    /// Retrieves the link stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link holds `code`.
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn resolve(&self, code: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
