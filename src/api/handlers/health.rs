//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage reachable
/// - **503 Service Unavailable**: Storage degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "3 links stored" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { storage },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks storage by counting stored links.
async fn check_storage(state: &AppState) -> CheckStatus {
    match state.link_service.count_links().await {
        Ok(count) => CheckStatus::ok(format!("{} links stored", count)),
        Err(e) => {
            tracing::warn!(error = %e, "health check: storage unavailable");
            CheckStatus::error("Storage unavailable")
        }
    }
}
