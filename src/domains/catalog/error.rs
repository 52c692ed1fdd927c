//! Catalog-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the tool catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a valid JSON array of tools.
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two tools share the same identifier.
    #[error("Duplicate tool id: {0}")]
    DuplicateId(i64),

    /// A tool identifier is zero or negative.
    #[error("Invalid tool id: {0} (ids must be positive)")]
    InvalidId(i64),
}

impl CatalogError {
    /// Create an I/O error for the given catalog path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
