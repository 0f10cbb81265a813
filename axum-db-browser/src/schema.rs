//! Wire types for the browser API
//!
//! JSON field names are fixed by existing clients, so several Rust fields
//! carry an explicit `serde(rename)`.

use serde::{Deserialize, Serialize};

/// A configured database as reported by `GET /api/databases`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    /// Configuration key used to address the database in URLs
    #[serde(rename = "django_name")]
    pub logical_name: String,

    /// Connection target (file path, database name, ...)
    #[serde(rename = "actual_name")]
    pub physical_name: String,

    /// Whether the engine identifier names PostgreSQL
    pub is_postgres: bool,
}

/// Response from listing databases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabasesResponse {
    pub databases: Vec<DatabaseDescriptor>,
}

/// A table found by a catalog query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    #[serde(rename = "table_name")]
    pub name: String,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response from listing tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<TableDescriptor>,
}

/// A column as reported by the catalog, independent of any driver type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Declared SQL type (e.g. "integer", "TEXT", "character varying")
    pub data_type: String,
}

/// A window of rows with every value rendered as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRows {
    /// Columns in catalog order
    pub columns: Vec<ColumnDescriptor>,

    /// Rows in the database's default order, values aligned with `columns`
    pub rows: Vec<Vec<String>>,
}

/// One page of table data as returned by the page endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Requested page (1-based)
    pub page: u64,

    /// `1 + total_count / per_page`
    #[serde(rename = "total_page")]
    pub total_pages: u64,

    /// 1-based index of the first row of the window
    #[serde(rename = "from")]
    pub from_index: u64,

    /// 1-based index of the last row of the window, capped at `total_count`
    #[serde(rename = "to")]
    pub to_index: u64,

    /// Number of rows covered by the window
    pub count: u64,

    /// Number of rows in the table
    pub total_count: u64,

    /// Column names in catalog order
    pub columns: Vec<String>,

    /// Row values rendered as text
    #[serde(rename = "results")]
    pub rows: Vec<Vec<String>>,
}
