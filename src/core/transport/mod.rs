//! Transport layer for the directory server.
//!
//! Serves the JSON API and the HTML pages over HTTP with axum. Handlers
//! delegate to [`DirectoryServer`](crate::core::DirectoryServer).

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult, message_response};
pub use self::http::{HttpTransport, build_router};
