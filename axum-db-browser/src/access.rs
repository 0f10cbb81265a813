//! Activation gate for the browser routes

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::config::BrowserConfig;

/// Refuse the request with 403 unless the browser is activated
///
/// The inner handler is not called on refusal, so nothing touches a database.
pub async fn require_activation(
    State(config): State<Arc<BrowserConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if !config.activate {
        tracing::debug!(path = %request.uri().path(), "browser not activated, refusing request");
        return StatusCode::FORBIDDEN.into_response();
    }

    next.run(request).await
}
