//! HTTP handlers for the template gallery.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::application::handlers::CreateFromTemplateCommand;
use crate::domain::foundation::TemplateId;
use crate::domain::workspace::ViewState;

use super::dto::{CreatedDocumentResponse, NavigationResponse, TemplateCard, TemplateListResponse};
use crate::adapters::http::{ApiError, AppState};

/// GET /api/templates
pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates = state
        .workbench
        .catalog()
        .all()
        .iter()
        .map(TemplateCard::from)
        .collect();
    Json(TemplateListResponse { templates })
}

/// POST /api/templates/:id/use
pub async fn use_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<CreatedDocumentResponse>), ApiError> {
    let cmd = CreateFromTemplateCommand {
        template_id: TemplateId::new(id)?,
    };
    let document = state.create_from_template_handler().handle(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedDocumentResponse {
            view: ViewState::Editor,
            document,
        }),
    ))
}

/// POST /api/templates/cancel
pub async fn cancel(State(state): State<AppState>) -> Json<NavigationResponse> {
    state.workbench.navigate(ViewState::Dashboard).await;
    Json(NavigationResponse {
        view: ViewState::Dashboard,
    })
}
