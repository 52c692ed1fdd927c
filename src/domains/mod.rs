//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the read-only tool catalog and category queries
//! - **favorites**: the in-memory favorites list
//! - **analytics**: frequency tables over the catalog
//! - **presentation**: server-rendered pages

pub mod analytics;
pub mod catalog;
pub mod favorites;
pub mod presentation;
