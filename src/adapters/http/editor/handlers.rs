//! HTTP handlers for the editor.

use axum::extract::{Json, Path, State};

use crate::domain::document::{ContentSection, FieldRef};
use crate::domain::workspace::ViewState;

use super::dto::{ContinueResponse, EditorState, GenerateResponse, SaveResponse, SetFieldRequest};
use crate::adapters::http::{ApiError, AppState};

/// GET /api/editor
pub async fn get_editor(State(state): State<AppState>) -> Result<Json<EditorState>, ApiError> {
    Ok(Json(state.workbench.editor_state().await?))
}

/// PUT /api/editor/fields/:name
///
/// Top-level attribute names are matched before content section names.
pub async fn set_field(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<SetFieldRequest>,
) -> Result<Json<EditorState>, ApiError> {
    let field = FieldRef::resolve(&name).ok_or_else(|| ApiError::unknown_field(&name))?;
    Ok(Json(state.workbench.edit_field(field, request.value).await?))
}

/// POST /api/editor/save
pub async fn save(State(state): State<AppState>) -> Result<Json<SaveResponse>, ApiError> {
    Ok(Json(state.workbench.save_editor().await?.into()))
}

/// POST /api/editor/preview
pub async fn continue_to_preview(
    State(state): State<AppState>,
) -> Result<Json<ContinueResponse>, ApiError> {
    let stored = state.workbench.continue_to_preview().await?;
    Ok(Json(ContinueResponse {
        view: ViewState::Preview,
        save: stored.into(),
    }))
}

/// POST /api/editor/sections/:section/generate
///
/// Waits for the generator; the result is applied only if the same editor
/// is still open.
pub async fn generate_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let section: ContentSection = section.parse()?;
    let outcome = state.workbench.generate_section(section).await?;
    let editor = state.workbench.editor_state().await.ok();
    Ok(Json(GenerateResponse { outcome, editor }))
}
