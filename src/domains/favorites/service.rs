//! Favorites service implementation.
//!
//! Joins the favorites store against the catalog and enforces the add/remove
//! rules: unknown tools are rejected, duplicates conflict, and removing an
//! id that is not a favorite is a not-found error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::error::FavoriteError;
use super::store::FavoritesStore;
use crate::domains::catalog::{Catalog, Tool};

/// A favorite joined with its tool record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub tool_id: i64,
    pub tool: Tool,
}

/// Integer value of a JSON number, accepting whole floats such as `5.0`.
fn whole_number(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Parse the JSON body of an add request (`{"toolId": <integer>}`).
///
/// A missing, `null`, `false` or zero `toolId` counts as missing. Strings,
/// fractions and other non-integer values are malformed. Negative ids parse
/// and are left to the catalog lookup.
pub fn parse_add_request(body: &[u8]) -> Result<i64, FavoriteError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| FavoriteError::invalid_body())?;

    let object = value.as_object().ok_or_else(FavoriteError::invalid_body)?;

    match object.get("toolId") {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => {
            Err(FavoriteError::missing_tool_id())
        }
        Some(serde_json::Value::Number(n)) => match whole_number(n) {
            Some(0) => Err(FavoriteError::missing_tool_id()),
            Some(id) => Ok(id),
            None => Err(FavoriteError::invalid_tool_id()),
        },
        Some(_) => Err(FavoriteError::invalid_tool_id()),
    }
}

/// Parse a tool id taken from a URL path segment.
pub fn parse_tool_id(raw: &str) -> Result<i64, FavoriteError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FavoriteError::invalid_tool_id())
}

/// Service for managing favorites.
#[derive(Debug)]
pub struct FavoritesService {
    catalog: Arc<Catalog>,
    store: FavoritesStore,
}

impl FavoritesService {
    /// Create a service with an empty store.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        info!("Initializing FavoritesService");
        Self {
            catalog,
            store: FavoritesStore::new(),
        }
    }

    /// Every favorite joined with its tool. Favorites without a catalog
    /// entry are dropped.
    pub async fn list(&self) -> Vec<FavoriteEntry> {
        self.store
            .ids()
            .await
            .into_iter()
            .filter_map(|id| {
                self.catalog.get(id).map(|tool| FavoriteEntry {
                    tool_id: id,
                    tool: tool.clone(),
                })
            })
            .collect()
    }

    /// Ids of all favorites, including those without a catalog entry.
    pub async fn ids(&self) -> Vec<i64> {
        self.store.ids().await
    }

    /// Add a tool to the favorites.
    pub async fn add(&self, tool_id: i64) -> Result<i64, FavoriteError> {
        if !self.catalog.contains(tool_id) {
            warn!("Rejected favorite for unknown tool {}", tool_id);
            return Err(FavoriteError::tool_not_found());
        }

        if !self.store.insert(tool_id).await {
            warn!("Tool {} is already a favorite", tool_id);
            return Err(FavoriteError::already_favorited());
        }

        info!("Added tool {} to favorites", tool_id);
        Ok(tool_id)
    }

    /// Remove a tool from the favorites.
    pub async fn remove(&self, tool_id: i64) -> Result<(), FavoriteError> {
        if !self.store.remove(tool_id).await {
            warn!("No favorite for tool {}", tool_id);
            return Err(FavoriteError::favorite_not_found());
        }

        info!("Removed tool {} from favorites", tool_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::fixtures::tool;

    fn service() -> FavoritesService {
        let catalog = Catalog::new(vec![
            tool(1, "Writing", "Free"),
            tool(2, "Writing", "Paid"),
            tool(3, "Image", "Free"),
        ])
        .unwrap();
        FavoritesService::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let service = service();
        assert_eq!(service.add(2).await, Ok(2));

        let entries = service.list().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tool_id, 2);
        assert_eq!(entries[0].tool.id, 2);
    }

    #[tokio::test]
    async fn test_add_twice_conflicts() {
        let service = service();
        service.add(1).await.unwrap();

        assert_eq!(
            service.add(1).await,
            Err(FavoriteError::already_favorited())
        );
        assert_eq!(service.ids().await, vec![1]);
    }

    #[tokio::test]
    async fn test_add_unknown_tool_leaves_store_unchanged() {
        let service = service();
        assert_eq!(service.add(999).await, Err(FavoriteError::tool_not_found()));
        assert!(service.ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_negative_id_is_not_found() {
        let service = service();
        assert_eq!(service.add(-3).await, Err(FavoriteError::tool_not_found()));
        assert!(service.ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_then_remove_again() {
        let service = service();
        service.add(3).await.unwrap();

        assert_eq!(service.remove(3).await, Ok(()));
        assert!(service.list().await.is_empty());
        assert_eq!(
            service.remove(3).await,
            Err(FavoriteError::favorite_not_found())
        );
    }

    #[tokio::test]
    async fn test_list_drops_ids_missing_from_catalog() {
        let service = service();
        service.add(1).await.unwrap();
        service.store.insert(42).await;

        let ids: Vec<i64> = service.list().await.iter().map(|e| e.tool_id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(service.ids().await, vec![1, 42]);
    }

    #[test]
    fn test_parse_add_request() {
        assert_eq!(parse_add_request(br#"{"toolId": 5}"#), Ok(5));
        assert_eq!(parse_add_request(br#"{"toolId": 5.0}"#), Ok(5));
        assert_eq!(parse_add_request(br#"{"toolId": -3}"#), Ok(-3));
        assert_eq!(
            parse_add_request(br#"{}"#),
            Err(FavoriteError::missing_tool_id())
        );
        assert_eq!(
            parse_add_request(br#"{"toolId": 0}"#),
            Err(FavoriteError::missing_tool_id())
        );
        assert_eq!(
            parse_add_request(br#"{"toolId": "5"}"#),
            Err(FavoriteError::invalid_tool_id())
        );
        assert_eq!(
            parse_add_request(br#"{"toolId": 1.5}"#),
            Err(FavoriteError::invalid_tool_id())
        );
        assert_eq!(
            parse_add_request(b"not json"),
            Err(FavoriteError::invalid_body())
        );
        assert_eq!(
            parse_add_request(b"[1]"),
            Err(FavoriteError::invalid_body())
        );
    }

    #[test]
    fn test_parse_tool_id() {
        assert_eq!(parse_tool_id("12"), Ok(12));
        assert_eq!(parse_tool_id("abc"), Err(FavoriteError::invalid_tool_id()));
        assert_eq!(parse_tool_id("1.5"), Err(FavoriteError::invalid_tool_id()));
        assert_eq!(
            parse_tool_id("12abc"),
            Err(FavoriteError::invalid_tool_id())
        );
    }
}
