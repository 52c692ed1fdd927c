//! Favorite-specific error types.

use thiserror::Error;

/// Errors returned by favorites operations.
///
/// The display text is the message reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoriteError {
    /// The tool identifier is missing or malformed.
    #[error("{0}")]
    InvalidRequest(String),

    /// The referenced tool or favorite does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The tool is already a favorite.
    #[error("{0}")]
    Conflict(String),
}

impl FavoriteError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Missing `toolId` in an add request.
    pub fn missing_tool_id() -> Self {
        Self::invalid_request("Tool ID is required")
    }

    /// Request body is not a JSON object.
    pub fn invalid_body() -> Self {
        Self::invalid_request("Invalid request body")
    }

    /// Tool id is present but not an integer.
    pub fn invalid_tool_id() -> Self {
        Self::invalid_request("Invalid tool ID")
    }

    pub fn tool_not_found() -> Self {
        Self::not_found("Tool not found")
    }

    pub fn favorite_not_found() -> Self {
        Self::not_found("Favorite not found")
    }

    pub fn already_favorited() -> Self {
        Self::conflict("Tool is already in favorites")
    }
}
