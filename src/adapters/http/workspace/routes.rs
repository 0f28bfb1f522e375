//! HTTP routes for workspace navigation.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{edit_document, get_workspace, navigate};
use crate::adapters::http::AppState;

pub fn workspace_router() -> Router<AppState> {
    Router::new()
        .route("/api/workspace", get(get_workspace))
        .route("/api/workspace/navigate", post(navigate))
        .route("/api/documents/:id/edit", post(edit_document))
}
