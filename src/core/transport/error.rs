//! Transport error types and HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domains::favorites::FavoriteError;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP-specific error.
    #[error("HTTP error: {0}")]
    HttpError(String),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }
}

/// JSON body `{"message": ...}` with the given status.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "message": message.into() })),
    )
        .into_response()
}

impl FavoriteError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FavoriteError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            FavoriteError::NotFound(_) => StatusCode::NOT_FOUND,
            FavoriteError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        message_response(self.status_code(), self.to_string())
    }
}
