//! Search, browse and route endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::http::AppState;
use crate::dictionary::{SearchRequest, SEARCH_PAGE_GROUP_LIMIT};
use crate::route::Route;
use crate::search::{AdvancedFilters, EnabledTypes, SortMode, DEFAULT_BROWSE_LIMIT};
use crate::types::EntityKind;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Comma-separated kinds, e.g. `lu,frame`; all kinds when absent
    pub types: Option<String>,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub frame: String,
    #[serde(default)]
    pub sort: String,
    /// Hits per kind; the search page shows up to 260
    pub limit: Option<usize>,
}

impl SearchParams {
    fn into_request(self) -> Result<SearchRequest, String> {
        let sort: SortMode = self.sort.parse()?;
        let types = match self.types {
            Some(names) => EnabledTypes::from_names(names.split(',')),
            None => EnabledTypes::all(),
        };
        Ok(SearchRequest {
            query: self.q,
            types,
            filters: AdvancedFilters::new(self.pos, self.frame),
            sort,
            limit: Some(self.limit.unwrap_or(SEARCH_PAGE_GROUP_LIMIT)),
        })
    }
}

/// GET /api/search - Grouped relevance search
pub async fn search_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let request = match params.into_request() {
        Ok(request) => request,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(message))).into_response()
        }
    };

    let snapshot = state.dictionary.snapshot();
    let results = snapshot.search(&request);
    let total = results.total;
    ApiResponse::with_total(results, snapshot.generation(), total).into_response()
}

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_letter")]
    pub letter: String,
    #[serde(default = "default_browse_limit")]
    pub limit: usize,
}

fn default_kind() -> String {
    "lu".to_string()
}

fn default_letter() -> String {
    "A".to_string()
}

fn default_browse_limit() -> usize {
    DEFAULT_BROWSE_LIMIT
}

/// GET /api/browse - Entries of one kind under a letter
pub async fn browse_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> impl IntoResponse {
    let kind: EntityKind = match params.kind.parse() {
        Ok(kind) => kind,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(message))).into_response()
        }
    };

    let snapshot = state.dictionary.snapshot();
    let page = snapshot.browse(kind, &params.letter, params.limit);
    let total = page.total;
    ApiResponse::with_total(page, snapshot.generation(), total).into_response()
}

#[derive(Debug, Deserialize)]
pub struct RouteParams {
    /// Fragment to resolve, e.g. `#lu:springa`
    pub fragment: Option<String>,
    /// Query to submit: exact lexical unit or search page
    pub submit: Option<String>,
}

/// GET /api/route - Resolve a fragment or a submitted query
pub async fn resolve_route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteParams>,
) -> impl IntoResponse {
    let snapshot = state.dictionary.snapshot();
    let route = match (params.submit, params.fragment) {
        (Some(query), _) => snapshot.submit(&query),
        (None, Some(fragment)) => snapshot.resolve(&Route::parse(&fragment)),
        (None, None) => {
            let error = ApiError::bad_request("Query parameter 'fragment' or 'submit' is required");
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let body = serde_json::json!({
        "route": route,
        "fragment": route.to_fragment(),
    });
    ApiResponse::new(body, snapshot.generation()).into_response()
}
