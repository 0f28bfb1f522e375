//! HTTP routes for the template gallery.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{cancel, list_templates, use_template};
use crate::adapters::http::AppState;

pub fn templates_router() -> Router<AppState> {
    Router::new()
        .route("/api/templates", get(list_templates))
        .route("/api/templates/cancel", post(cancel))
        .route("/api/templates/:id/use", post(use_template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::{app_state, body_json, get, post};
    use crate::domain::workspace::ViewState;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_four_templates_with_badges() {
        let app = templates_router().with_state(app_state());

        let response = app.oneshot(get("/api/templates")).await.unwrap();

        let body = body_json(response).await;
        let templates = body["templates"].as_array().unwrap();
        assert_eq!(templates.len(), 4);
        assert_eq!(templates[0]["id"], "t1");
        assert_eq!(templates[0]["badge"], "Batam Curriculum Standard");
        assert!(templates[2].get("badge").is_none());
    }

    #[tokio::test]
    async fn using_template_creates_draft() {
        let state = app_state();
        let app = templates_router().with_state(state.clone());

        let response = app.oneshot(post("/api/templates/t1/use")).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["view"], "editor");
        assert_eq!(body["document"]["type"], "teaching_module");
        assert_eq!(body["document"]["status"], "draft");
        assert_eq!(state.store().documents().await.len(), 3);
    }

    #[tokio::test]
    async fn unknown_template_is_not_found() {
        let state = app_state();
        let app = templates_router().with_state(state.clone());

        let response = app.oneshot(post("/api/templates/t42/use")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "TEMPLATE_NOT_FOUND");
        assert_eq!(state.store().documents().await.len(), 2);
    }

    #[tokio::test]
    async fn cancel_returns_to_dashboard() {
        let state = app_state();
        state.workbench.navigate(ViewState::Templates).await;
        let app = templates_router().with_state(state.clone());

        let response = app.oneshot(post("/api/templates/cancel")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store().current_view().await, ViewState::Dashboard);
        assert_eq!(state.store().documents().await.len(), 2);
    }
}
