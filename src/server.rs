//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database connections, migrations, and the
//! Axum server lifecycle.

use crate::application::services::{LinkService, UrlValidator};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::domain::resolver::HostResolver;
use crate::infrastructure::dns::SystemResolver;
use crate::infrastructure::persistence::{InMemoryLinkRepository, MIGRATOR, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link storage (PostgreSQL pool with migrations applied, or in-memory)
/// - System DNS resolver bounded by the configured timeout
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_repository = build_repository(&config).await?;

    let resolver: Arc<dyn HostResolver> = Arc::new(SystemResolver::new());
    let validator = UrlValidator::new(resolver, config.dns_timeout());
    let link_service = Arc::new(LinkService::new(link_repository, validator));

    let state = AppState::new(link_service).with_asset_dirs(&config.views_dir, &config.public_dir);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Selects the link repository for the configured backend.
async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;

            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgLinkRepository::with_max_attempts(
                Arc::new(pool),
                config.allocation_max_attempts,
            )))
        }
    }
}

/// Opens a PostgreSQL pool using the configured limits.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Completes on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
