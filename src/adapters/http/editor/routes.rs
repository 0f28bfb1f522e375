//! HTTP routes for the editor.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{continue_to_preview, generate_section, get_editor, save, set_field};
use crate::adapters::http::AppState;

pub fn editor_router() -> Router<AppState> {
    Router::new()
        .route("/api/editor", get(get_editor))
        .route("/api/editor/fields/:name", put(set_field))
        .route("/api/editor/save", post(save))
        .route("/api/editor/preview", post(continue_to_preview))
        .route("/api/editor/sections/:section/generate", post(generate_section))
}
