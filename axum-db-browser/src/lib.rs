//! # axum-db-browser
//!
//! A read-only browser for configured SQL databases, mountable as an Axum router.
//!
//! ## Features
//!
//! - Lists the configured databases
//! - Lists the tables of a database's public schema
//! - Pages through table rows with every value rendered as text
//! - Support for PostgreSQL and SQLite side by side
//!
//! ## Access
//!
//! Every route answers `403 Forbidden` until `activate = true` is set in the
//! configuration. There is no other authentication: an activated browser
//! exposes all rows of every configured database, so keep it off public
//! networks.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use axum_db_browser::{BrowserConfig, DbBrowserLayer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BrowserConfig::from_toml_str(r#"
//!         activate = true
//!
//!         [[databases]]
//!         name = "default"
//!         engine = "sqlite"
//!         location = "./db.sqlite3"
//!         url = "sqlite:./db.sqlite3"
//!     "#)?;
//!
//!     let app = Router::new()
//!         .route("/", get(|| async { "Hello, World!" }))
//!         .merge(DbBrowserLayer::from_config("/db", config)?.into_router());
//!
//!     // Serve the application...
//!     Ok(())
//! }
//! ```

// Public modules
pub mod access;
pub mod api;
pub mod config;
pub mod database;
pub mod frontend;
pub mod layer;
pub mod pagination;
pub mod registry;
pub mod schema;

// Public exports
pub use config::{BrowserConfig, DatabaseConfig};
pub use layer::DbBrowserLayer;
pub use pagination::{PageRequest, PageWindow};
pub use registry::ConnectionRegistry;
pub use schema::{
    ColumnDescriptor, DatabaseDescriptor, PageResult, TableDescriptor, TableRows,
};

// Re-export database providers
pub use database::traits::{DatabaseError, DatabaseProvider};

#[cfg(feature = "sqlite")]
pub use database::sqlite::SqliteProvider;

#[cfg(feature = "postgres")]
pub use database::postgres::PostgresProvider;

// Error type
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type Result<T> = std::result::Result<T, Error>;
