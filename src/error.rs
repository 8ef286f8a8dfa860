//! Error types for the animal registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

// == Api Error Enum ==
/// Unified error type for store operations and request handling.
///
/// Every variant is terminal for the request that raised it; none of them
/// leave the store partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request body did not decode into an Animal
    #[error("{0}")]
    MalformedPayload(String),

    /// Path segment is not a valid non-negative integer
    #[error("Invalid ID")]
    InvalidIdentifier(String),

    /// Create was called with an id that is already taken
    #[error("Duplicate entry")]
    DuplicateId(i64),

    /// No animal stored under the given id
    #[error("Animal not found")]
    NotFound(i64),

    /// Listing was requested while the store holds no animals
    #[error("No animals found")]
    EmptyCollection,
}

impl ApiError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_)
            | ApiError::InvalidIdentifier(_)
            | ApiError::DuplicateId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::EmptyCollection => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::InvalidIdentifier(raw) => {
                warn!(raw_id = %raw, "rejected request: invalid id")
            }
            ApiError::DuplicateId(id) | ApiError::NotFound(id) => {
                warn!(id, error = %self, "rejected request")
            }
            _ => warn!(error = %self, "rejected request"),
        }

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the animal registry.
pub type Result<T> = std::result::Result<T, ApiError>;
