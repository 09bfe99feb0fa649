//! API error types.
//!
//! One variant per user-visible failure kind, each carrying a short fixed
//! message. Validation failures are deliberately undifferentiated: the
//! response never says which field was rejected.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submitted receipt failed format validation
    #[error("The receipt is invalid.")]
    InvalidReceipt,

    /// Lookup identifier is syntactically invalid (blank)
    #[error("No receipt found for that ID.")]
    InvalidRequest,

    /// Well-formed identifier with no stored result
    #[error("No receipt found for that ID.")]
    NotFound,

    /// Unexpected failure while processing; details stay server-side
    #[error("Internal server error")]
    Internal,
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: String,
    /// Error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            ApiError::InvalidReceipt => (StatusCode::BAD_REQUEST, "INVALID_RECEIPT"),
            ApiError::InvalidRequest => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
