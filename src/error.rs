//! Error types for the blog frontend
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Blog Error Enum ==
/// Unified error type for the blog frontend.
#[derive(Error, Debug)]
pub enum BlogError {
    /// The content backend query failed or returned no usable data
    #[error("Content fetch failed: {0}")]
    ContentFetch(String),

    /// The backend answered, but the requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Returns true when the error should be rendered as a "not found" page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::ContentFetch(_) | BlogError::NotFound(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        // Fetch failures surface as "not found" rather than a server error.
        let status = match &self {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            BlogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the blog frontend.
pub type Result<T> = std::result::Result<T, BlogError>;
