//! HTTP routes for dashboard endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_dashboard_overview, start_new_document};
use crate::adapters::http::AppState;

pub fn dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard_overview))
        .route("/api/dashboard/create", post(start_new_document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::{app_state, body_json, get, post};
    use crate::domain::workspace::ViewState;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn overview_lists_seeded_documents() {
        let app = dashboard_router().with_state(app_state());

        let response = app.oneshot(get("/api/dashboard")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["stats"]["total"], 2);
        assert_eq!(body["documents"].as_array().unwrap().len(), 2);
        assert_eq!(body["is_empty"], false);
    }

    #[tokio::test]
    async fn search_and_type_are_applied() {
        let app = dashboard_router().with_state(app_state());

        let response = app
            .oneshot(get("/api/dashboard?search=ALGEBRA&type=reflection_sheet"))
            .await
            .unwrap();

        let body = body_json(response).await;
        let rows = body["documents"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "doc_002");
        assert_eq!(body["filter"]["type"], "reflection_sheet");
    }

    #[tokio::test]
    async fn no_match_reports_empty_state() {
        let app = dashboard_router().with_state(app_state());

        let response = app.oneshot(get("/api/dashboard?search=chemistry")).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["is_empty"], true);
        assert_eq!(body["empty_message"], "No documents found matching your criteria.");
    }

    #[tokio::test]
    async fn unknown_type_is_bad_request() {
        let app = dashboard_router().with_state(app_state());

        let response = app.oneshot(get("/api/dashboard?type=essay")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_new_opens_template_gallery() {
        let state = app_state();
        let app = dashboard_router().with_state(state.clone());

        let response = app.oneshot(post("/api/dashboard/create")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.store().current_view().await, ViewState::Templates);
    }
}
