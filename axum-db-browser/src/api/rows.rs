//! Paginated table data endpoint

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::{error_response, BrowserState};
use crate::database::traits::{DatabaseError, DatabaseProvider};
use crate::pagination::PageRequest;
use crate::schema::PageResult;

/// Handler for GET /api/database/{database}/tables/{table}/{page}/{per_page}/
///
/// Fetches one page of a table.
///
/// Path parameters:
/// - database: logical database name
/// - table: table name, must appear in the database's catalog listing
/// - page: 1-based page number
/// - per_page: rows per page (at most `max_per_page`)
///
/// # Returns
///
/// JSON response containing the page window, column names and row values,
/// 400 for out-of-range page parameters, 404 for unknown tables
pub async fn get_table_page_handler(
    State(state): State<BrowserState>,
    Path((database, table, page, per_page)): Path<(String, String, u64, u64)>,
) -> Response {
    let result = async {
        let request = PageRequest::new(page, per_page, state.config.max_per_page)?;
        let provider = state.registry.get(&database)?;
        read_table_page(provider.as_ref(), &table, request).await
    }
    .await;

    match result {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => {
            tracing::error!(%database, %table, page, per_page, %error, "failed to read table page");
            error_response(&error)
        }
    }
}

/// Read one page of a table
///
/// The table name is checked verbatim against the catalog listing before it
/// reaches any SQL text; names that are not listed fail with
/// [`DatabaseError::TableNotFound`].
pub async fn read_table_page(
    provider: &dyn DatabaseProvider,
    table: &str,
    request: PageRequest,
) -> Result<PageResult, DatabaseError> {
    let tables = provider.list_tables().await?;
    if !tables.iter().any(|candidate| candidate.name == table) {
        return Err(DatabaseError::TableNotFound(table.to_string()));
    }

    let total_count = provider.count_rows(table).await?;
    let window = request.window(total_count);

    tracing::debug!(
        table,
        offset = window.offset,
        limit = window.limit,
        total_count,
        "fetching page window"
    );
    let rows = provider.fetch_rows(table, window.offset, window.limit).await?;

    Ok(PageResult {
        page: window.page,
        total_pages: window.total_pages,
        from_index: window.from_index,
        to_index: window.to_index,
        count: window.count,
        total_count: window.total_count,
        columns: rows.columns.into_iter().map(|column| column.name).collect(),
        rows: rows.rows,
    })
}
