//! Link repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage with a counter-row allocator
//! - [`InMemoryLinkRepository`] - process-local storage for development and tests
//!
//! [`MIGRATOR`] embeds the SQL migrations from `migrations/`.

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::{DEFAULT_MAX_ALLOCATION_ATTEMPTS, PgLinkRepository};

use sqlx::migrate::Migrator;

/// Schema migrations for the PostgreSQL backend.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
