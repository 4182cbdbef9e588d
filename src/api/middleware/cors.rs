//! Cross-origin access for browser clients.

use tower_http::cors::{Any, CorsLayer};

/// Allows requests from any origin.
///
/// The service exposes only public, unauthenticated endpoints, so no
/// credentials are involved.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
