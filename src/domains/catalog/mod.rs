//! Catalog domain module.
//!
//! The catalog is the static, read-only set of tool records loaded once per
//! process. It is shared behind an `Arc` and needs no synchronization.
//!
//! ## Architecture
//!
//! - `model.rs` - The `Tool` record
//! - `registry.rs` - Catalog loading and id lookup
//! - `service.rs` - Category query service
//! - `error.rs` - Catalog load errors

mod error;
mod model;
mod registry;
mod service;

pub use error::CatalogError;
pub use model::{Tool, same_category};
pub use registry::Catalog;
pub use service::{ALL_CATEGORIES, ToolQueryService, is_unfiltered};

#[cfg(test)]
pub(crate) use model::fixtures;
