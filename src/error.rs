//! Error types for the matching service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Upstream Error Enum ==
/// Failure reported by a remote embedding or completion API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The API rejected the call for exceeding its rate limit
    #[error("rate limited by upstream")]
    RateLimited,

    /// The API answered with a non-success status
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The response could not be interpreted
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

// == App Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// A remote dependency failed, retries included
    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] UpstreamError),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, AppError>;
