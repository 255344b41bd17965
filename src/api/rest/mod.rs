//! REST endpoints
//!
//! - `GET /api/search` - grouped relevance search
//! - `GET /api/browse` - A–Z listing of one kind
//! - `GET /api/route` - deep-link resolution and query submission
//! - `GET /api/entries/:key` - one entry with related entries
//! - `POST /api/annotate` - span annotation of a sentence
//! - `GET /api/filters` - advanced filter values
//! - `GET /api/stats`, `POST /api/reload` - snapshot administration

pub mod admin;
pub mod entries;
pub mod search;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::LexiconError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Generation of the snapshot that answered
    pub generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, generation: u64) -> Self {
        Self {
            data,
            generation,
            total: None,
        }
    }

    pub fn with_total(data: T, generation: u64, total: usize) -> Self {
        Self {
            data,
            generation,
            total: Some(total),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a lexicon error onto a status and error body
pub fn error_response(e: &LexiconError) -> Response {
    let status = match e {
        LexiconError::UnknownEntity(_) => StatusCode::NOT_FOUND,
        LexiconError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ApiError {
        error: e.to_string(),
        code: e.code().to_string(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_serialization() {
        let value = serde_json::to_value(ApiResponse::new("x", 3)).unwrap();
        assert_eq!(value["generation"], 3);
        assert!(value.get("total").is_none());

        let value = serde_json::to_value(ApiResponse::with_total(vec![1, 2], 1, 2)).unwrap();
        assert_eq!(value["total"], 2);
    }

    #[test]
    fn test_error_status() {
        let not_found = error_response(&LexiconError::UnknownEntity("lu:x".to_string()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let bad = error_response(&LexiconError::InvalidArgument("x".to_string()));
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        let manifest = error_response(&LexiconError::InvalidManifest("x".to_string()));
        assert_eq!(manifest.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let encode = error_response(&LexiconError::Serialization(source));
        assert_eq!(encode.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
