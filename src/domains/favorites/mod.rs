//! Favorites domain module.
//!
//! Favorites are tool ids marked by the user. They live in memory for the
//! lifetime of the process and are joined against the catalog for display.
//!
//! ## Architecture
//!
//! - `store.rs` - Lock-guarded in-memory id list
//! - `service.rs` - Add/remove/list rules and request parsing
//! - `error.rs` - InvalidRequest / NotFound / Conflict taxonomy

mod error;
mod service;
mod store;

pub use error::FavoriteError;
pub use service::{FavoriteEntry, FavoritesService, parse_add_request, parse_tool_id};
pub use store::FavoritesStore;
