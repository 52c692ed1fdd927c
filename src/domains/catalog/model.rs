//! Tool record as stored in the catalog.

use serde::{Deserialize, Serialize};

/// A single entry of the AI tools directory.
///
/// Records are immutable once loaded; every component reads them through
/// shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique positive identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Free-form category label (e.g. "Writing").
    pub category: String,

    /// External link to the tool.
    pub url: String,

    /// Short description.
    pub excerpt: String,

    /// Ordered tags, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Pricing label, conventionally "Free", "Freemium" or "Paid".
    pub pricing: String,
}

/// Case-insensitive category comparison, Unicode-aware.
///
/// Every category match in the crate goes through here so the `/tools`
/// query, the listing filter and the category selector agree.
pub fn same_category(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Tool {
    /// Whether the tool belongs to `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        same_category(&self.category, category)
    }

    /// Case-insensitive substring match over name, excerpt and tags.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_default_to_empty() {
        let tool: Tool = serde_json::from_str(
            r#"{"id":1,"name":"A","category":"Writing","url":"u","excerpt":"e","pricing":"Free"}"#,
        )
        .unwrap();
        assert!(tool.tags.is_empty());
    }

    #[test]
    fn test_in_category_ignores_case() {
        let tool = fixtures::tool(1, "Image Generation", "Free");
        assert!(tool.in_category("image generation"));
        assert!(tool.in_category("IMAGE GENERATION"));
        assert!(!tool.in_category("Image"));
    }

    #[test]
    fn test_same_category_folds_non_ascii() {
        assert!(same_category("Éducation", "éDUCATION"));
        assert!(same_category("Übersetzung", "übersetzung"));
        assert!(!same_category("Éducation", "Education"));
    }

    #[test]
    fn test_matches_tags() {
        let mut tool = fixtures::tool(1, "Audio", "Free");
        tool.tags = vec!["Transcription".to_string()];
        assert!(tool.matches_lowercase("scrip"));
        assert!(!tool.matches_lowercase("video"));
    }
}
