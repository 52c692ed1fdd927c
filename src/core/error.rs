//! Error types and handling for the directory server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport layer.

use thiserror::Error;

/// A specialized Result type for directory server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the directory server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error loading the tool catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::catalog::CatalogError),

    /// Error from a favorites operation.
    #[error("Favorite error: {0}")]
    Favorite(#[from] crate::domains::favorites::FavoriteError),

    /// Error binding or serving HTTP.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
