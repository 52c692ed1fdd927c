//! Configuration management for the directory server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, `.env` files, or defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the directory server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Catalog source configuration.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, reported by `/health`.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where the tool catalog is loaded from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The bundled catalog is used when unset.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "ai-tools-directory".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `AITOOLS_`, for example
    /// `AITOOLS_CATALOG_PATH` or `AITOOLS_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("AITOOLS_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("AITOOLS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("AITOOLS_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        if let Ok(path) = std::env::var("AITOOLS_CATALOG_PATH") {
            info!("Catalog path set to {}", path);
            config.catalog.path = Some(PathBuf::from(path));
        }

        config.transport = HttpConfig::from_env();

        config
    }
}
