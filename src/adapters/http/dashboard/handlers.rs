//! HTTP handlers for dashboard endpoints.

use axum::extract::{Json, Query, State};

use crate::application::handlers::GetDashboardOverviewQuery;
use crate::domain::dashboard::{DocumentFilter, TypeFilter};
use crate::domain::workspace::ViewState;

use super::dto::{DashboardOverview, DashboardParams, NavigationResponse};
use crate::adapters::http::{ApiError, AppState};

/// GET /api/dashboard?search=&type=
pub async fn get_dashboard_overview(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardOverview>, ApiError> {
    let type_filter: TypeFilter = params.doc_type.parse()?;
    let query = GetDashboardOverviewQuery {
        filter: DocumentFilter::new(params.search, type_filter),
    };
    Ok(Json(state.dashboard_overview_handler().handle(query).await))
}

/// POST /api/dashboard/create
///
/// "Create new" opens the template gallery.
pub async fn start_new_document(State(state): State<AppState>) -> Json<NavigationResponse> {
    state.workbench.navigate(ViewState::Templates).await;
    Json(NavigationResponse {
        view: ViewState::Templates,
    })
}
