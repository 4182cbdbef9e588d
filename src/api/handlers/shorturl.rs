//! Handler for link shortening endpoint.

use axum::{Form, Json, extract::State};

use crate::api::dto::shorturl::{ShortUrlResponse, ShortenForm};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single `url` field:
///
/// ```text
/// url=https://www.freecodecamp.org
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** `{"error":"invalid url"}` if the URL is malformed,
///   not HTTP(S), or its host does not resolve
/// - **503 Service Unavailable** if no code could be allocated
/// - **500 Internal Server Error** on storage failures
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let link = state.link_service.create_short_link(&form.url).await?;

    Ok(Json(link.into()))
}
