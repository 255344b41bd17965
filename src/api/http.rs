//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{admin, entries, search};
use crate::dictionary::Dictionary;

/// Shared state of every handler
pub struct AppState {
    pub dictionary: Arc<Dictionary>,
}

impl AppState {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/search", get(search::search_entries))
        .route("/api/browse", get(search::browse_entries))
        .route("/api/route", get(search::resolve_route))
        .route("/api/entries/:key", get(entries::get_entry))
        .route("/api/annotate", post(entries::annotate_sentence))
        .route("/api/filters", get(admin::filter_options))
        .route("/api/stats", get(admin::get_stats))
        .route("/api/reload", post(admin::reload))
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
