//! Listing filter.
//!
//! Pure function of `(catalog, search term, category)`; the listing page
//! calls it on every request instead of keeping a filtered copy around.

use serde::{Deserialize, Serialize};

use crate::domains::catalog::{Tool, is_unfiltered};

/// Query parameters accepted by the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Free-text search term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// Category filter; `"all"` means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ListingQuery {
    /// Trimmed search term, empty when absent.
    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Selected category, `None` when unfiltered.
    pub fn category(&self) -> Option<&str> {
        let category = self.category.as_deref();
        if is_unfiltered(category) {
            None
        } else {
            category
        }
    }

    /// Encode as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }
}

/// Tools matching both the search term and the category.
///
/// Search is a case-insensitive substring match over name, excerpt and
/// tags. Category matching is case-insensitive, like the `/tools` query.
pub fn filter_tools<'a>(tools: &'a [Tool], search: &str, category: Option<&str>) -> Vec<&'a Tool> {
    let needle = search.trim().to_lowercase();

    tools
        .iter()
        .filter(|tool| needle.is_empty() || tool.matches_lowercase(&needle))
        .filter(|tool| match category {
            Some(c) if !is_unfiltered(Some(c)) => tool.in_category(c),
            _ => true,
        })
        .collect()
}
