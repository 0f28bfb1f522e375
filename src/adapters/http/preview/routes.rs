//! HTTP routes for the print preview.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{change_status, export, get_preview};
use crate::adapters::http::AppState;

pub fn preview_router() -> Router<AppState> {
    Router::new()
        .route("/api/preview", get(get_preview))
        .route("/api/preview/status", put(change_status))
        .route("/api/preview/export", get(export))
}
