//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Form body of `POST /api/shorturl`.
///
/// A missing `url` field deserializes to an empty string and is rejected by
/// validation like any other bad input.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Successful creation response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<Link> for ShortUrlResponse {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.code,
        }
    }
}
