//! Link entity representing a short code to URL mapping.

use serde::Serialize;

/// A stored short link.
///
/// `code` is assigned by the repository at allocation time and never changes;
/// `original_url` is stored exactly as it was accepted by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub code: i64,
    pub original_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: i64, original_url: impl Into<String>) -> Self {
        Self {
            code,
            original_url: original_url.into(),
        }
    }
}
