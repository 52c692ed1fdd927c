//! Tools query service.
//!
//! Filters the catalog by category. The sentinel `"all"` (or no filter)
//! returns the whole catalog.

use std::sync::Arc;
use tracing::debug;

use super::model::Tool;
use super::registry::Catalog;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Whether a category filter value imposes no constraint.
pub fn is_unfiltered(category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(c) => c.is_empty() || c.eq_ignore_ascii_case(ALL_CATEGORIES),
    }
}

/// Read-only query access to the catalog.
#[derive(Debug, Clone)]
pub struct ToolQueryService {
    catalog: Arc<Catalog>,
}

impl ToolQueryService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tools in the given category (case-insensitive), in catalog order.
    pub fn list(&self, category: Option<&str>) -> Vec<Tool> {
        match category {
            Some(c) if !is_unfiltered(Some(c)) => {
                debug!("Filtering tools by category '{}'", c);
                self.catalog
                    .tools()
                    .iter()
                    .filter(|tool| tool.in_category(c))
                    .cloned()
                    .collect()
            }
            _ => self.catalog.tools().to_vec(),
        }
    }
}
