//! AI Tools Directory
//!
//! A small web directory of AI tools: a filterable listing backed by a
//! static catalog, an in-memory favorites list, and an analytics dashboard
//! counting tools by category and pricing tier.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handle and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: the read-only tool catalog and category queries
//!   - **favorites**: the in-memory favorites list
//!   - **analytics**: frequency tables over the catalog
//!   - **presentation**: server-rendered HTML pages
//!
//! # Example
//!
//! ```rust,no_run
//! use ai_tools_directory::core::{Config, DirectoryServer, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = DirectoryServer::new(config.clone())?;
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use self::core::{Config, DirectoryServer, Error, Result};
