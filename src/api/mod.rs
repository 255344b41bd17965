//! HTTP API
//!
//! REST endpoints over the current dictionary snapshot, served with axum.

pub mod http;
pub mod rest;

pub use http::{create_router, AppState};
