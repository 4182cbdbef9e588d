//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// Allocation attempts used by [`PgLinkRepository::new`].
pub const DEFAULT_MAX_ALLOCATION_ATTEMPTS: u32 = 5;

#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    code: i64,
    original_url: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.code, row.original_url)
    }
}

/// PostgreSQL repository for link storage and code allocation.
///
/// Codes come from the single-row `link_sequence` counter. The increment is
/// one `UPDATE ... RETURNING` statement, so concurrent allocations serialize
/// on the counter row and never observe the same value. The primary key on
/// `links.code` rejects a code that an outside writer has already taken; such
/// a conflict moves on to the next counter value. The counter is never
/// decremented, so a code is not handed out twice even when rows disappear.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    max_attempts: u32,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_max_attempts(pool, DEFAULT_MAX_ALLOCATION_ATTEMPTS)
    }

    /// Creates a repository that gives up allocation after `max_attempts`
    /// conflicting codes.
    pub fn with_max_attempts(pool: Arc<PgPool>, max_attempts: u32) -> Self {
        Self {
            pool,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Advances the counter and returns the new value.
    async fn next_code(&self) -> Result<i64, AppError> {
        let code = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE link_sequence
            SET last_code = last_code + 1
            WHERE id = 1
            RETURNING last_code
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        code.ok_or_else(|| {
            AppError::StorageUnavailable("link_sequence counter row is missing".to_string())
        })
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn allocate(&self, original_url: &str) -> Result<Link, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.next_code().await?;

            let inserted = sqlx::query(
                r#"
                INSERT INTO links (code, original_url)
                VALUES ($1, $2)
                "#,
            )
            .bind(code)
            .bind(original_url)
            .execute(self.pool.as_ref())
            .await;

            match inserted {
                Ok(_) => return Ok(Link::new(code, original_url)),
                Err(e) if is_unique_violation_on_code(&e) => {
                    metrics::counter!("shorturl_allocation_conflicts_total").increment(1);
                    tracing::warn!(attempt, code, "short code already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::AllocationFailed {
            attempts: self.max_attempts,
        })
    }

    async fn find_by_code(&self, code: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, original_url
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
