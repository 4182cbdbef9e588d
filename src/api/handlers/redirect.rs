//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_code::parse_short_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Request Flow
///
/// 1. Parse the path token as a decimal code
/// 2. Look the code up in storage
/// 3. Return 302 Found with `Location` set to the stored URL
///
/// # Errors
///
/// Returns 404 Not Found with `{"error":"invalid url"}` when the token is not
/// a decimal number or no link holds the code.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Some(code) = parse_short_code(&token) else {
        debug!(token = %token, "malformed short code");
        return Err(AppError::not_found(token));
    };

    let link = state.link_service.resolve(code).await?;
    let location = location_header(&link.original_url)?;

    metrics::counter!("shorturl_redirects_total").increment(1);
    debug!(code, url = %link.original_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Builds the `Location` value for a stored URL.
///
/// Stored strings that are not valid header values (rows written outside the
/// service) are sent in the parser's percent-encoded form instead.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(target) {
        return Ok(value);
    }

    warn!(
        url = %target.escape_debug(),
        "stored url is not a valid header value, encoding it"
    );

    Url::parse(target)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::StorageUnavailable(format!(
                "stored url `{}` cannot be used as a redirect target",
                target.escape_debug()
            ))
        })
}
