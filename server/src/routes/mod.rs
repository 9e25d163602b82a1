//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole page: the chat relay under `/api`, a
//! health probe, and the static site (HTML, CSS, wasm packages) as the
//! fallback service.

pub mod chat;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes: the chat relay and health probe.
///
/// Same-origin only: no CORS headers are sent, since every call spends the
/// server-held API key.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::ask))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Resolve the path to the static website directory.
#[must_use]
pub fn website_dir() -> PathBuf {
    std::env::var("WEBSITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../website"))
}

/// Full application: API routes + static site at `/`.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let website_service = ServeDir::new(site_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(website_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
