//! DbBrowserLayer - Main Axum integration layer
//!
//! This module provides the main entry point for integrating axum-db-browser
//! into an Axum application.

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::access::require_activation;
use crate::api::{
    get_table_page_handler, list_databases_handler, list_tables_handler, BrowserState,
};
use crate::config::BrowserConfig;
use crate::frontend::create_frontend_router;
use crate::registry::ConnectionRegistry;

/// Main layer for integrating the database browser into an Axum application
///
/// # Example
///
/// ```rust,no_run
/// use axum::Router;
/// use axum_db_browser::{BrowserConfig, DbBrowserLayer};
///
/// # async fn example() -> axum_db_browser::Result<()> {
/// let config = BrowserConfig::load("browser.toml")?;
/// let browser = DbBrowserLayer::from_config("/db", config)?;
/// let app = Router::new().merge(browser.into_router());
/// # Ok(())
/// # }
/// ```
pub struct DbBrowserLayer {
    base_path: String,
    config: Arc<BrowserConfig>,
    registry: Arc<ConnectionRegistry>,
}

impl DbBrowserLayer {
    /// Create a browser over an existing registry
    ///
    /// # Arguments
    ///
    /// * `base_path` - The URL path where the browser will be mounted (e.g., "/db"), or "" for the root
    /// * `config` - Browser settings; its database list feeds `/api/databases`
    /// * `registry` - Providers addressed by logical database name
    pub fn new(
        base_path: impl Into<String>,
        config: BrowserConfig,
        registry: ConnectionRegistry,
    ) -> Self {
        let base_path = base_path.into().trim_end_matches('/').to_string();
        Self {
            base_path,
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Create a browser with lazily-connecting pools for every configured database
    pub fn from_config(base_path: impl Into<String>, config: BrowserConfig) -> crate::Result<Self> {
        let registry = ConnectionRegistry::from_config(&config)?;
        Ok(Self::new(base_path, config, registry))
    }

    /// Convert into an Axum Router that can be merged
    ///
    /// The returned router includes:
    /// - Browser page at `{base_path}` and `{base_path}/`
    /// - API endpoints at `{base_path}/api/*`
    /// - The activation gate on every route
    /// - Permissive CORS middleware for development
    pub fn into_router(self) -> Router {
        let state = BrowserState::new(self.config.clone(), self.registry.clone());
        let gate = middleware::from_fn_with_state(self.config.clone(), require_activation);

        let api_router = Router::new()
            .route("/databases", get(list_databases_handler))
            .route("/database/{database}/tables/", get(list_tables_handler))
            .route(
                "/database/{database}/tables/{table}/{page}/{per_page}/",
                get(get_table_page_handler),
            )
            .with_state(state);

        let router = Router::new()
            .nest(&format!("{}/api", self.base_path), api_router)
            .merge(create_frontend_router(self.base_path.clone()));

        router.route_layer(gate).layer(CorsLayer::permissive())
    }
}
