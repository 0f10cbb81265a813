//! PostgreSQL database provider implementation

use crate::database::traits::{DatabaseError, DatabaseProvider};
use crate::database::NULL_TEXT;
use crate::schema::{ColumnDescriptor, TableDescriptor, TableRows};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

/// Schema every catalog query is restricted to
const PUBLIC_SCHEMA: &str = "public";

/// Tables and views of the public schema, by name
const LIST_TABLES_QUERY: &str = r#"
    SELECT table_name::text
    FROM information_schema.tables
    WHERE table_schema = 'public'
    ORDER BY table_name
"#;

const TABLE_COLUMNS_QUERY: &str = r#"
    SELECT
        column_name::text AS column_name,
        data_type::text AS data_type
    FROM information_schema.columns
    WHERE table_schema = 'public'
      AND table_name = $1
    ORDER BY ordinal_position
"#;

const TABLE_EXISTS_QUERY: &str = r#"
    SELECT EXISTS (
        SELECT 1
        FROM information_schema.tables
        WHERE table_schema = 'public'
          AND table_name = $1
    )
"#;

/// PostgreSQL database provider
pub struct PostgresProvider {
    pool: PgPool,
}

impl PostgresProvider {
    /// Create a new PostgreSQL provider
    ///
    /// # Arguments
    ///
    /// * `pool` - PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a provider whose pool connects on first use
    pub fn connect_lazy(url: &str) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new().connect_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Quote an identifier to prevent SQL injection
    fn quote_identifier(identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }

    fn qualified_table(table: &str) -> String {
        format!(
            "{}.{}",
            Self::quote_identifier(PUBLIC_SCHEMA),
            Self::quote_identifier(table)
        )
    }

    fn count_query(table: &str) -> String {
        format!("SELECT COUNT(*) FROM {}", Self::qualified_table(table))
    }

    /// Build the window query, casting every column to text server-side
    ///
    /// The cast gives PostgreSQL's own textual form for every type, including
    /// the ones sqlx has no decoder for (numeric, intervals, arrays, ...).
    /// `bytea` is summarised by length; NULL stays NULL through `||`.
    fn select_query(table: &str, columns: &[ColumnDescriptor]) -> String {
        let select_list = columns
            .iter()
            .map(|column| {
                let quoted = Self::quote_identifier(&column.name);
                if column.data_type == "bytea" {
                    format!("'[BLOB: ' || octet_length({}) || ' bytes]' AS {}", quoted, quoted)
                } else {
                    format!("{}::text AS {}", quoted, quoted)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        // An empty select list is valid PostgreSQL and yields zero-width rows
        format!(
            "SELECT {} FROM {} LIMIT $1 OFFSET $2",
            select_list,
            Self::qualified_table(table)
        )
    }

    async fn table_exists(&self, table: &str) -> Result<bool, DatabaseError> {
        let exists: bool = sqlx::query_scalar(TABLE_EXISTS_QUERY)
            .bind(table)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

#[async_trait]
impl DatabaseProvider for PostgresProvider {
    async fn list_tables(&self) -> Result<Vec<TableDescriptor>, DatabaseError> {
        let names: Vec<String> = sqlx::query_scalar(LIST_TABLES_QUERY)
            .fetch_all(&self.pool)
            .await?;

        Ok(names.into_iter().map(TableDescriptor::new).collect())
    }

    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, DatabaseError> {
        let rows = sqlx::query(TABLE_COLUMNS_QUERY)
            .bind(table)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                Ok(ColumnDescriptor {
                    name: row.try_get("column_name")?,
                    data_type: row.try_get("data_type")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(DatabaseError::from)
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
        // `CREATE TABLE t ()` is legal; only a missing table is an error
        if columns.is_empty() && !self.table_exists(table).await? {
            return Err(DatabaseError::TableNotFound(table.to_string()));
        }

        let rows = sqlx::query(&Self::select_query(table, &columns))
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        let mut rendered = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                let value: Option<String> = row.try_get(index)?;
                values.push(value.unwrap_or_else(|| NULL_TEXT.to_string()));
            }
            rendered.push(values);
        }

        Ok(TableRows {
            columns,
            rows: rendered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            data_type: data_type.to_string(),
        }
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(PostgresProvider::quote_identifier("users"), "\"users\"");
        assert_eq!(
            PostgresProvider::quote_identifier("users\"; DROP TABLE users; --"),
            "\"users\"\"; DROP TABLE users; --\""
        );
    }

    #[test]
    fn test_count_query_is_schema_qualified() {
        assert_eq!(
            PostgresProvider::count_query("orders"),
            "SELECT COUNT(*) FROM \"public\".\"orders\""
        );
    }

    #[test]
    fn test_select_query_casts_columns_to_text() {
        let sql = PostgresProvider::select_query(
            "users",
            &[column("id", "integer"), column("Full Name", "text")],
        );
        assert_eq!(
            sql,
            "SELECT \"id\"::text AS \"id\", \"Full Name\"::text AS \"Full Name\" \
             FROM \"public\".\"users\" LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_catalog_queries_restricted_to_public_schema() {
        for query in [LIST_TABLES_QUERY, TABLE_COLUMNS_QUERY, TABLE_EXISTS_QUERY] {
            assert!(query.contains("table_schema = 'public'"), "{query}");
        }
        assert!(LIST_TABLES_QUERY.contains("ORDER BY table_name"));
        assert!(TABLE_COLUMNS_QUERY.contains("ORDER BY ordinal_position"));
        assert!(TABLE_COLUMNS_QUERY.contains("table_name = $1"));
    }

    #[test]
    fn test_select_query_without_columns() {
        assert_eq!(
            PostgresProvider::select_query("empty", &[]),
            "SELECT  FROM \"public\".\"empty\" LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_select_query_summarises_bytea() {
        let sql = PostgresProvider::select_query("files", &[column("data", "bytea")]);
        assert!(sql.starts_with(
            "SELECT '[BLOB: ' || octet_length(\"data\") || ' bytes]' AS \"data\" FROM"
        ));
    }
}
