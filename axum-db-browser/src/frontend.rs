//! Browser page serving
//!
//! This module serves the embedded browser page with proper caching,
//! MIME types, and base path injection for routing.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use include_dir::{include_dir, Dir};
use std::sync::Arc;

// Embed the page directory at compile time
static FRONTEND_DISTRIBUTION: Dir = include_dir!("$CARGO_MANIFEST_DIR/frontend/dist");

/// State for frontend serving (stores base path for routing)
#[derive(Clone)]
pub struct FrontendState {
    pub base_path: Arc<String>,
}

impl FrontendState {
    /// Create a new frontend state with the given base path
    pub fn new(base_path: String) -> Self {
        Self {
            base_path: Arc::new(base_path),
        }
    }
}

/// Create a router for serving the browser page
///
/// Routes are registered at their full paths, so the result is merged rather
/// than nested:
/// - GET {base_path} and {base_path}/ -> index.html with injected <base href> tag
/// - GET {base_path}/assets/* -> static assets with long-term caching
///
/// # Arguments
///
/// * `base_path` - The base URL path where the browser is mounted (e.g., "/db"), or "" for the root
pub fn create_frontend_router(base_path: String) -> Router {
    let index_path = format!("{}/", base_path);
    let assets_path = format!("{}/assets/{{*path}}", base_path);

    let mut router = Router::new().route(&index_path, get(serve_index_page));
    // axum treats "/db" and "/db/" as different routes
    if !base_path.is_empty() {
        router = router.route(&base_path, get(serve_index_page));
    }

    router
        .route(&assets_path, get(serve_static_asset))
        .with_state(FrontendState::new(base_path))
}

/// Insert `<base href="{base_path}/">` right after the opening head tag
fn inject_base_tag(contents: &str, base_path: &str) -> String {
    let mut contents = contents.to_string();
    if let Some(head_position) = contents.find("<head>") {
        let insert_position = head_position + "<head>".len();
        let base_tag = format!("\n    <base href=\"{}/\">", base_path);
        contents.insert_str(insert_position, &base_tag);
    }
    contents
}

/// Serve the index.html file at the root path
///
/// Caching: max-age=3600 (1 hour) for index.html
async fn serve_index_page(State(state): State<FrontendState>) -> Response {
    let Some(file) = FRONTEND_DISTRIBUTION.get_file("index.html") else {
        return (StatusCode::NOT_FOUND, "Browser page not found").into_response();
    };

    let contents = inject_base_tag(&String::from_utf8_lossy(file.contents()), &state.base_path);

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        contents,
    )
        .into_response()
}

/// Serve static assets with proper MIME types
///
/// Caching: max-age=31536000 (1 year) for static assets
async fn serve_static_asset(Path(path): Path<String>) -> Response {
    let asset_path = format!("assets/{}", path);

    match FRONTEND_DISTRIBUTION.get_file(&asset_path) {
        Some(file) => {
            let mime_type = mime_guess::from_path(&asset_path)
                .first_or_octet_stream()
                .to_string();

            (
                [
                    (header::CONTENT_TYPE, mime_type),
                    (
                        header::CACHE_CONTROL,
                        "public, max-age=31536000, immutable".to_string(),
                    ),
                ],
                Body::from(file.contents()),
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Asset not found: {}", asset_path),
        )
            .into_response(),
    }
}
