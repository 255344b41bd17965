//! Entry and annotation endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{error_response, ApiResponse};
use crate::api::http::AppState;
use crate::types::SpanTag;

/// GET /api/entries/:key - One entry with related entries and annotated examples
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let snapshot = state.dictionary.snapshot();
    match snapshot.entry(&key) {
        Ok(view) => ApiResponse::new(view, snapshot.generation()).into_response(),
        Err(e) => error_response(&e),
    }
}

#[derive(Debug, Deserialize)]
pub struct AnnotateBody {
    pub sentence: String,
    #[serde(default)]
    pub tags: Vec<SpanTag>,
    #[serde(rename = "frameId")]
    pub frame_id: Option<String>,
}

/// POST /api/annotate - Segments and legend for a sentence
pub async fn annotate_sentence(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnnotateBody>,
) -> impl IntoResponse {
    let snapshot = state.dictionary.snapshot();
    let annotated = snapshot.annotate_sentence(&body.sentence, body.tags, body.frame_id.as_deref());
    ApiResponse::new(annotated, snapshot.generation())
}
