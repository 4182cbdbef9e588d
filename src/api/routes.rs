//! API route configuration.

use crate::api::handlers::{create_short_url_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`               - Create a short link from form field `url`
/// - `GET  /shorturl/{short_url}`   - Redirect to the stored URL
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(create_short_url_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
