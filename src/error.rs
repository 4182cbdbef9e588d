//! Application error type shared by the core services and the HTTP layer.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed request.
///
/// The shape matches the public contract of the service: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by link creation and resolution.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The candidate URL failed syntax or host-resolvability validation.
    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },

    /// No record matches the requested short code.
    #[error("no short url for code `{code}`")]
    NotFound { code: String },

    /// A unique code could not be obtained within the configured attempts.
    #[error("could not allocate a unique short code after {attempts} attempts")]
    AllocationFailed { attempts: u32 },

    /// The persistence layer could not serve the request.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl ToString) -> Self {
        Self::NotFound {
            code: code.to_string(),
        }
    }

    /// HTTP status used when the error reaches the transport layer.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::AllocationFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients.
    ///
    /// Validation and lookup failures both report `invalid url`, which is
    /// what existing clients of the service match on. Internal details of
    /// storage failures are never exposed.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } | AppError::NotFound { .. } => "invalid url",
            AppError::AllocationFailed { .. } => "could not allocate a short url, try again",
            AppError::StorageUnavailable(_) => "internal server error",
        }
    }

    /// Returns true when retrying the whole request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::AllocationFailed { .. })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StorageUnavailable(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if self.is_transient() {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_url("empty input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found(7).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::AllocationFailed { attempts: 5 }.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::StorageUnavailable("pool closed".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_storage_details() {
        let err = AppError::StorageUnavailable("password authentication failed".to_string());
        assert_eq!(err.public_message(), "internal server error");
        assert!(err.to_string().contains("password authentication failed"));
    }

    #[test]
    fn test_not_found_reports_invalid_url() {
        let err = AppError::not_found("abc");
        assert_eq!(err.public_message(), "invalid url");
        assert_eq!(err.to_string(), "no short url for code `abc`");
    }

    #[test]
    fn test_only_allocation_failure_is_transient() {
        assert!(AppError::AllocationFailed { attempts: 3 }.is_transient());
        assert!(!AppError::invalid_url("x").is_transient());
        assert!(!AppError::StorageUnavailable("x".to_string()).is_transient());
    }

    #[test]
    fn test_allocation_failure_response_asks_for_retry() {
        let response = AppError::AllocationFailed { attempts: 5 }.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers()[header::RETRY_AFTER], "1");

        let response = AppError::not_found(1).into_response();
        assert!(response.headers().get(header::RETRY_AFTER).is_none());
    }

    #[test]
    fn test_sqlx_error_maps_to_storage_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }
}
