//! # API Error Type
//!
//! Unified error type for the service layer and HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt Points                         │
//! │                                                                         │
//! │  JsonRejection (not JSON, wrong content type) ──┐                      │
//! │  ValidationError (shape)  ──────────────────────┴─► InvalidReceipt 400 │
//! │  JsonRejection (body over limit) ───────────────► BodyTooLarge    413  │
//! │  unknown / malformed id ────────────────────────► NotFound        404  │
//! │  StoreError ────────────────────────────────────► Store           500  │
//! │                                                                         │
//! │  ParseError never gets here: scoring absorbs it.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! { "error": "Receipt not found: 7fb1377b-b223-49d9-a31a-5a02701dd310" }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use points_core::ValidationError;
use points_store::StoreError;
use serde::Serialize;
use tracing::error;

/// Errors returned by [`ReceiptService`](crate::services::ReceiptService)
/// and the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid receipt format: {0}")]
    InvalidReceipt(#[from] ValidationError),

    #[error("Request body exceeds the configured size limit")]
    BodyTooLarge,

    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    #[error("Receipt store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Creates a NotFound error for the given id text.
    pub fn not_found(id: impl Into<String>) -> Self {
        ApiError::NotFound { id: id.into() }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::BodyTooLarge;
        }
        ApiError::InvalidReceipt(ValidationError::InvalidShape {
            reason: rejection.body_text(),
        })
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Store(e) => {
                error!(error = %e, "Receipt store failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type for service and handler operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidReceipt(ValidationError::required("total")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("abc").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            ApiError::Store(StoreError::LockPoisoned { operation: "get" }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::InvalidReceipt(ValidationError::required("total")).to_string(),
            "Invalid receipt format: total is required"
        );
        assert_eq!(
            ApiError::not_found("abc").to_string(),
            "Receipt not found: abc"
        );
    }
}
