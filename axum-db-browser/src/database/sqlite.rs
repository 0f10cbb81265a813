//! SQLite database provider implementation

use crate::database::traits::{DatabaseError, DatabaseProvider};
use crate::database::{blob_text, NULL_TEXT};
use crate::schema::{ColumnDescriptor, TableDescriptor, TableRows};
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool, TypeInfo, ValueRef};

/// Tables and views, without SQLite's internal `sqlite_` objects
///
/// `_` is a LIKE wildcard, so it is escaped to keep names like `sqlite1data`.
const LIST_TABLES_QUERY: &str = r"SELECT name FROM sqlite_master WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite\_%' ESCAPE '\' ORDER BY name";

/// SQLite database provider
///
/// SQLite has no `public` schema; the `main` schema stands in for it.
pub struct SqliteProvider {
    pool: SqlitePool,
}

impl SqliteProvider {
    /// Create a new SQLite provider
    ///
    /// # Arguments
    ///
    /// * `pool` - SQLite connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a provider whose pool connects on first use
    pub fn connect_lazy(url: &str) -> Result<Self, DatabaseError> {
        let pool = SqlitePoolOptions::new().connect_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Quote an identifier (table or column name)
    ///
    /// SQLite uses double quotes for identifiers. This function escapes any
    /// double quotes in the identifier by doubling them.
    fn quote_identifier(identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }

    fn count_query(table: &str) -> String {
        format!("SELECT COUNT(*) FROM {}", Self::quote_identifier(table))
    }

    fn select_query(table: &str) -> String {
        format!(
            "SELECT * FROM {} LIMIT ? OFFSET ?",
            Self::quote_identifier(table)
        )
    }

    /// REAL values keep a decimal point even when integral (`9.0`, not `9`)
    fn real_text(value: f64) -> String {
        if value.is_finite() && value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            value.to_string()
        }
    }

    /// Render one column of a row as text
    ///
    /// SQLite is dynamically typed, so the value's storage class decides the
    /// decoding rather than the declared column type.
    fn render_value(row: &SqliteRow, index: usize) -> Result<String, DatabaseError> {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(NULL_TEXT.to_string());
        }
        let storage_class = raw.type_info().name().to_string();

        match storage_class.as_str() {
            "INTEGER" => {
                if let Ok(value) = row.try_get::<i64, _>(index) {
                    return Ok(value.to_string());
                }
            }
            "REAL" => {
                if let Ok(value) = row.try_get::<f64, _>(index) {
                    return Ok(Self::real_text(value));
                }
            }
            "TEXT" => {
                if let Ok(value) = row.try_get::<String, _>(index) {
                    return Ok(value);
                }
            }
            "BLOB" => {
                if let Ok(value) = row.try_get::<Vec<u8>, _>(index) {
                    return Ok(blob_text(&value));
                }
            }
            _ => {}
        }

        // Fallback: try common types in order
        if let Ok(value) = row.try_get::<String, _>(index) {
            return Ok(value);
        }
        if let Ok(value) = row.try_get::<i64, _>(index) {
            return Ok(value.to_string());
        }
        if let Ok(value) = row.try_get::<f64, _>(index) {
            return Ok(Self::real_text(value));
        }
        if let Ok(value) = row.try_get::<Vec<u8>, _>(index) {
            return Ok(blob_text(&value));
        }

        Err(DatabaseError::Query(format!(
            "cannot render SQLite value of type {}",
            storage_class
        )))
    }
}

#[async_trait]
impl DatabaseProvider for SqliteProvider {
    async fn list_tables(&self) -> Result<Vec<TableDescriptor>, DatabaseError> {
        let names: Vec<String> = sqlx::query_scalar(LIST_TABLES_QUERY)
            .fetch_all(&self.pool)
            .await?;

        Ok(names.into_iter().map(TableDescriptor::new).collect())
    }

    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, DatabaseError> {
        // pragma_table_info returns: cid, name, type, notnull, dflt_value, pk
        let rows = sqlx::query("SELECT name, type FROM pragma_table_info(?) ORDER BY cid")
            .bind(table)
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Err(DatabaseError::TableNotFound(table.to_string()));
        }

        rows.iter()
            .map(|row| -> Result<ColumnDescriptor, DatabaseError> {
                Ok(ColumnDescriptor {
                    name: row.try_get("name")?,
                    data_type: row.try_get("type")?,
                })
            })
            .collect()
    }

    async fn count_rows(&self, table: &str) -> Result<u64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(&Self::count_query(table))
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn fetch_rows(
        &self,
        table: &str,
        offset: u64,
        limit: u64,
    ) -> Result<TableRows, DatabaseError> {
        let columns = self.table_columns(table).await?;

        let rows = sqlx::query(&Self::select_query(table))
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        let mut rendered = Vec::with_capacity(rows.len());
        for row in &rows {
            let values = (0..row.len())
                .map(|index| Self::render_value(row, index))
                .collect::<Result<Vec<_>, _>>()?;
            rendered.push(values);
        }

        Ok(TableRows {
            columns,
            rows: rendered,
        })
    }
}
