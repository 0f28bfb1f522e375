//! HTTP handlers for workspace navigation.

use axum::extract::{Json, Path, State};

use crate::domain::foundation::DocumentId;
use crate::domain::workspace::ViewState;

use super::dto::{EditDocumentResponse, NavigateRequest, WorkspaceResponse};
use crate::adapters::http::{ApiError, AppState};

/// GET /api/workspace
pub async fn get_workspace(State(state): State<AppState>) -> Json<WorkspaceResponse> {
    Json(state.store().snapshot().await.into())
}

/// POST /api/workspace/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Json<WorkspaceResponse> {
    state.workbench.navigate(request.view).await;
    Json(state.store().snapshot().await.into())
}

/// POST /api/documents/:id/edit
///
/// Selects the document and opens the editor on it.
pub async fn edit_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditDocumentResponse>, ApiError> {
    let id = DocumentId::new(id)?;
    let document = state.workbench.edit_document(&id).await?;
    Ok(Json(EditDocumentResponse {
        view: ViewState::Editor,
        document,
    }))
}
