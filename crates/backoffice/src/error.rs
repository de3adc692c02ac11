//! Unified error handling at the HTTP boundary.
//!
//! Every error response carries the same JSON envelope:
//!
//! ```json
//! { "error": "Customer not found" }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::services::ServiceError;

/// Application-level error type for the back office API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Invalid(msg) => Self::BadRequest(msg),
            ServiceError::Store(err) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg,
            Self::Internal(_) => "Internal server error".to_owned(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::store::StoreError;

    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::NotFound("Customer not found".to_owned());
        assert_eq!(err.to_string(), "Not found: Customer not found");

        let err = AppError::BadRequest("Invalid email format".to_owned());
        assert_eq!(err.to_string(), "Bad request: Invalid email format");
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                AppError::NotFound("x".to_owned()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::BadRequest("x".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Internal("x".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_service_error_mapping() {
        let err: AppError = ServiceError::NotFound("Order not found".to_owned()).into();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Order not found"));

        let err: AppError = ServiceError::Invalid("Price must be greater than 0".to_owned()).into();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err: AppError = ServiceError::Store(StoreError::Poisoned).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
