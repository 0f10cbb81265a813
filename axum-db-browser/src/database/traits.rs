//! Database provider trait
//!
//! This trait defines the catalog and paging operations every driver must provide.

use crate::schema::{ColumnDescriptor, TableDescriptor, TableRows};
use async_trait::async_trait;
use axum::http::StatusCode;
use thiserror::Error;

/// Database provider trait for catalog discovery and windowed row access
///
/// Providers are stored as `Arc<dyn DatabaseProvider>` in the connection
/// registry, one per configured logical database.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + 'static {
    /// List the tables visible in the database's public schema, ordered by name
    async fn list_tables(&self) -> Result<Vec<TableDescriptor>, DatabaseError>;

    /// Columns of a table in catalog order
    ///
    /// # Arguments
    ///
    /// * `table` - Name of a table previously returned by `list_tables`
    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, DatabaseError>;

    /// Total number of rows in a table
    async fn count_rows(&self, table: &str) -> Result<u64, DatabaseError>;

    /// Fetch the row window `[offset, offset + limit)` in the database's default order
    ///
    /// Every value is rendered as text.
    ///
    /// # Arguments
    ///
    /// * `table` - Name of a table previously returned by `list_tables`
    /// * `offset` - Number of rows to skip
    /// * `limit` - Maximum number of rows to return
    async fn fetch_rows(
        &self,
        table: &str,
        offset: u64,
        limit: u64,
    ) -> Result<TableRows, DatabaseError>;
}

/// Database error type
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Generic database error
    #[error("Database error: {0}")]
    Query(String),

    /// Table not present in the catalog
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Logical database name not present in the registry
    #[error("Unknown database: {0}")]
    UnknownDatabase(String),

    /// Configured engine has no provider
    #[error("Unsupported database engine '{engine}' for database '{database}'")]
    UnsupportedEngine { database: String, engine: String },

    /// Page parameters out of range
    #[error("Invalid page request: {0}")]
    InvalidPage(String),
}

impl DatabaseError {
    /// HTTP status used when this error reaches a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            DatabaseError::TableNotFound(_) => StatusCode::NOT_FOUND,
            DatabaseError::InvalidPage(_) => StatusCode::BAD_REQUEST,
            DatabaseError::Query(_)
            | DatabaseError::UnknownDatabase(_)
            | DatabaseError::UnsupportedEngine { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        DatabaseError::Query(error.to_string())
    }
}
