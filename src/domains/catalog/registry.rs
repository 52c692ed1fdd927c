//! Catalog - the read-only collection of tools loaded at startup.
//!
//! The catalog is either read from the file named in the configuration or
//! taken from the copy bundled into the binary.

use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::error::CatalogError;
use super::model::Tool;
use crate::core::config::CatalogConfig;

/// Catalog bundled with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../../data/tools.json");

/// Read-only tool catalog with an id index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
    /// Key: tool id, Value: position in `tools`
    index: HashMap<i64, usize>,
}

impl Catalog {
    /// Build a catalog from tool records, enforcing id invariants.
    pub fn new(tools: Vec<Tool>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(tools.len());

        for (position, tool) in tools.iter().enumerate() {
            if tool.id <= 0 {
                return Err(CatalogError::InvalidId(tool.id));
            }
            if index.insert(tool.id, position).is_some() {
                return Err(CatalogError::DuplicateId(tool.id));
            }
        }

        Ok(Self { tools, index })
    }

    /// Parse a catalog from a JSON array.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let tools: Vec<Tool> = serde_json::from_str(json)?;
        Self::new(tools)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// The catalog bundled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Load the catalog named by the configuration, or the embedded one.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Self::from_path(path)?
            }
            None => {
                info!("Loading embedded catalog");
                Self::embedded()?
            }
        };

        info!("Catalog loaded: {} tools", catalog.len());
        Ok(catalog)
    }

    /// All tools in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a tool by id.
    pub fn get(&self, id: i64) -> Option<&Tool> {
        self.index.get(&id).map(|&position| &self.tools[position])
    }

    /// Whether a tool with this id exists.
    pub fn contains(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Distinct categories in first-encountered order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tool in &self.tools {
            if !seen.contains(&tool.category.as_str()) {
                seen.push(&tool.category);
            }
        }
        seen
    }
}
