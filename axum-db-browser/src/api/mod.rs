//! REST API endpoints
//!
//! This module contains all API endpoint handlers for the browser.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::database::traits::DatabaseError;
use crate::registry::ConnectionRegistry;

pub mod databases;
pub mod rows;
pub mod tables;

// Re-export handlers for convenience
pub use databases::list_databases_handler;
pub use rows::{get_table_page_handler, read_table_page};
pub use tables::list_tables_handler;

/// Shared state handed to every API handler
#[derive(Clone)]
pub struct BrowserState {
    pub config: Arc<BrowserConfig>,
    pub registry: Arc<ConnectionRegistry>,
}

impl BrowserState {
    pub fn new(config: Arc<BrowserConfig>, registry: Arc<ConnectionRegistry>) -> Self {
        Self { config, registry }
    }
}

/// JSON error body with the status matching the error kind
pub(crate) fn error_response(error: &DatabaseError) -> Response {
    let status: StatusCode = error.status_code();
    (
        status,
        Json(serde_json::json!({
            "error": error.to_string()
        })),
    )
        .into_response()
}
