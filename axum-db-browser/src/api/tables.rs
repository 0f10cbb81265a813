//! Table listing endpoint

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::{error_response, BrowserState};
use crate::schema::TablesResponse;

/// Handler for GET /api/database/{database}/tables/
///
/// Returns the tables of the database's public schema.
///
/// # Arguments
///
/// * `state` - Configuration and connection registry
/// * `database` - Logical database name, used only as a registry key
///
/// # Returns
///
/// JSON response containing the table names
pub async fn list_tables_handler(
    State(state): State<BrowserState>,
    Path(database): Path<String>,
) -> Response {
    let result = match state.registry.get(&database) {
        Ok(provider) => provider.list_tables().await,
        Err(error) => Err(error),
    };

    match result {
        Ok(tables) => (StatusCode::OK, Json(TablesResponse { tables })).into_response(),
        Err(error) => {
            tracing::error!(%database, %error, "failed to list tables");
            error_response(&error)
        }
    }
}
