//! HTTP-facing error types.
//!
//! The wire shape of each failure is part of the API contract: create
//! validation and lookup failures use a `message` key, update
//! validation and internal faults use an `error` key. Internal error
//! detail never reaches the client; it is logged server-side instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the request boundary
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Create body is missing a required field
    #[error("Missing required fields")]
    MissingFields,

    /// Update body failed validation
    #[error("Missing required fields")]
    InvalidUpdate,

    /// No product for the given id
    #[error("Product not found")]
    NotFound,

    /// Duplicate product name on create or rename
    #[error("Product name already exists")]
    DuplicateName,

    /// Unexpected store failure; detail stays server-side
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::InvalidUpdate => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateName => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a store failure onto the API taxonomy.
    ///
    /// Expected outcomes map directly; anything else becomes a 500 with
    /// the detail logged rather than leaked.
    pub fn from_store(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::DuplicateName(_) => ApiError::DuplicateName,
            other => {
                let detail = other.to_string();
                Logger::error("request_failed", &[("detail", detail.as_str())]);
                ApiError::Internal
            }
        }
    }

    /// JSON body for this error, with the contract's key shape.
    pub fn body(&self) -> Value {
        match self {
            ApiError::MissingFields | ApiError::NotFound | ApiError::DuplicateName => {
                json!({ "message": self.to_string() })
            }
            ApiError::InvalidUpdate | ApiError::Internal => {
                json!({ "error": self.to_string() })
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
