//! Directory server and lifecycle management.
//!
//! `DirectoryServer` owns the configuration, the catalog and the domain
//! services. It is cheap to clone and is the only state the HTTP transport
//! shares between handlers.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::analytics::{self, Report};
use crate::domains::catalog::{Catalog, Tool, ToolQueryService};
use crate::domains::favorites::{FavoriteEntry, FavoriteError, FavoritesService};
use crate::domains::presentation::{self, ListingQuery};

/// The main server handle.
#[derive(Debug, Clone)]
pub struct DirectoryServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Category queries over the catalog.
    tools: ToolQueryService,

    /// Favorites list joined against the catalog.
    favorites: Arc<FavoritesService>,
}

impl DirectoryServer {
    /// Load the configured catalog and create the server.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create a server around an already loaded catalog.
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        info!("Initializing services for {} tools", catalog.len());

        Self {
            config: Arc::new(config),
            tools: ToolQueryService::new(catalog.clone()),
            favorites: Arc::new(FavoritesService::new(catalog)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        self.tools.catalog()
    }

    // ========================================================================
    // API operations
    // ========================================================================

    /// Tools in a category, or the whole catalog.
    pub fn list_tools(&self, category: Option<&str>) -> Vec<Tool> {
        self.tools.list(category)
    }

    /// Favorites joined with their tools.
    pub async fn list_favorites(&self) -> Vec<FavoriteEntry> {
        self.favorites.list().await
    }

    /// Add a favorite.
    pub async fn add_favorite(&self, tool_id: i64) -> std::result::Result<i64, FavoriteError> {
        self.favorites.add(tool_id).await
    }

    /// Remove a favorite.
    pub async fn remove_favorite(&self, tool_id: i64) -> std::result::Result<(), FavoriteError> {
        self.favorites.remove(tool_id).await
    }

    /// Analytics over the full catalog, recomputed on each call.
    pub fn analytics(&self) -> Report {
        analytics::aggregate(&self.tools.list(None))
    }

    // ========================================================================
    // Pages
    // ========================================================================

    /// Render the tool listing.
    pub async fn render_listing(&self, query: &ListingQuery) -> String {
        let favorite_ids = self.favorites.ids().await;
        presentation::listing_page(self.catalog(), &favorite_ids, query)
    }

    /// Render the favorites page.
    pub async fn render_favorites(&self) -> String {
        presentation::favorites_page(&self.list_favorites().await)
    }

    /// Render the analytics dashboard.
    pub fn render_analytics(&self) -> String {
        presentation::analytics_page(&self.analytics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CatalogConfig;

    #[test]
    fn test_server_loads_embedded_catalog() {
        let server = DirectoryServer::new(Config::default()).unwrap();
        assert_eq!(server.list_tools(None).len(), 12);
        assert_eq!(server.name(), "ai-tools-directory");
    }

    #[test]
    fn test_server_reports_catalog_errors() {
        let config = Config {
            catalog: CatalogConfig {
                path: Some("/nonexistent/tools.json".into()),
            },
            ..Config::default()
        };
        let err = DirectoryServer::new(config).unwrap_err();
        assert!(err.to_string().starts_with("Catalog error:"));
    }

    #[tokio::test]
    async fn test_clones_share_favorites() {
        let server = DirectoryServer::new(Config::default()).unwrap();
        let clone = server.clone();

        clone.add_favorite(5).await.unwrap();
        let ids: Vec<i64> = server
            .list_favorites()
            .await
            .iter()
            .map(|e| e.tool_id)
            .collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_analytics_over_full_catalog() {
        let server = DirectoryServer::new(Config::default()).unwrap();
        let report = server.analytics();
        assert_eq!(report.summary.total_tools, 12);
        assert_eq!(report.pricing[0].pricing, "Freemium");
    }
}
