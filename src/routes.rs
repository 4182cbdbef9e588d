//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                          - Landing page (`index.html` from the views directory)
//! - `GET  /public/*`                  - Static assets
//! - `POST /api/shorturl`              - Create a short link
//! - `GET  /api/shorturl/{short_url}`  - Redirect to the stored URL
//! - `GET  /health`                    - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the router with all routes and middleware, without path normalization.
///
/// Useful for tests that mount the routes directly.
pub fn router(state: AppState) -> Router {
    let index = ServeFile::new(state.views_dir.join("index.html"));
    let public = ServeDir::new(&state.public_dir);

    Router::new()
        .route_service("/", index)
        .nest_service("/public", public)
        .route("/health", get(health_handler))
        .nest("/api", api::routes::shorturl_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
