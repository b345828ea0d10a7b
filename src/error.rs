//! Error types surfaced by the API.
//!
//! Domain failures are either a missing key or a conflicting write. Those,
//! and undecodable request input, render as `{"detail": "..."}` bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A referenced activity or student does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate signup, duplicate email, or unregistering a non-participant.
    #[error("{0}")]
    Conflict(String),

    /// The request body or query string could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),

    /// The CSV writer failed while rendering the export.
    #[error("failed to render export: {0}")]
    Export(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
