//! HTTP adapters - REST API implementations.
//!
//! Each area (workspace, dashboard, templates, editor, preview) has its own
//! dto/handlers/routes modules. All areas share one [`AppState`].

pub mod dashboard;
pub mod editor;
mod error;
pub mod preview;
mod state;
pub mod templates;
pub mod workspace;

pub use dashboard::dashboard_router;
pub use editor::editor_router;
pub use error::{ApiError, ErrorResponse};
pub use preview::preview_router;
pub use state::AppState;
pub use templates::templates_router;
pub use workspace::workspace_router;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Assembles every area into one router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(workspace_router())
        .merge(dashboard_router())
        .merge(templates_router())
        .merge(editor_router())
        .merge(preview_router())
        .with_state(state)
}
