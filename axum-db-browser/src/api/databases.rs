//! Database listing endpoint

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};

use super::BrowserState;
use crate::schema::DatabasesResponse;

/// Handler for GET /api/databases
///
/// Lists every configured database in declaration order. Answered from the
/// configuration alone; no connection is opened, so unreachable databases
/// are listed too.
pub async fn list_databases_handler(State(state): State<BrowserState>) -> Response {
    Json(DatabasesResponse {
        databases: state.config.descriptors(),
    })
    .into_response()
}
