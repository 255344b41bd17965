//! Filter option, statistics and reload endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use super::{error_response, ApiError, ApiResponse};
use crate::api::http::AppState;

/// GET /api/filters - Parts of speech and frames for the advanced filters
pub async fn filter_options(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.dictionary.snapshot();
    ApiResponse::new(snapshot.filter_options(), snapshot.generation())
}

/// GET /api/stats - Counts and diagnostics of the current snapshot
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.dictionary.snapshot();
    ApiResponse::new(snapshot.stats(), snapshot.generation())
}

/// POST /api/reload - Rebuild the snapshot from disk
pub async fn reload(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let dictionary = Arc::clone(&state.dictionary);
    let outcome = tokio::task::spawn_blocking(move || dictionary.reload()).await;

    match outcome {
        Ok(Ok(snapshot)) => ApiResponse::new(snapshot.stats(), snapshot.generation()).into_response(),
        Ok(Err(e)) => error_response(&e),
        Err(join_error) => {
            error!(error = %join_error, "Reload task failed");
            let body = ApiError::internal(format!("reload task failed: {}", join_error));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
