//! HTTP handlers for the print preview.

use axum::extract::{Json, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{ExportDocumentQuery, GetPreviewQuery};

use super::dto::{ChangeStatusRequest, ChangeStatusResponse, ExportParams, PreviewResponse};
use crate::adapters::http::{ApiError, AppState};

/// GET /api/preview
pub async fn get_preview(State(state): State<AppState>) -> Result<Json<PreviewResponse>, ApiError> {
    Ok(Json(state.preview_handler().handle(GetPreviewQuery).await?))
}

/// PUT /api/preview/status
pub async fn change_status(
    State(state): State<AppState>,
    Json(request): Json<ChangeStatusRequest>,
) -> Result<Json<ChangeStatusResponse>, ApiError> {
    let document = state.workbench.change_status(request.status).await?;
    Ok(Json(ChangeStatusResponse { document }))
}

/// GET /api/preview/export?format=html|markdown
///
/// Returns the page inline; the HTML variant opens the print dialog when loaded.
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let query = ExportDocumentQuery {
        format: params.format()?,
    };
    let exported = state.export_handler().handle(query).await?;

    let disposition = format!("inline; filename=\"{}\"", exported.filename);
    Ok((
        [
            (header::CONTENT_TYPE, exported.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        exported.content,
    )
        .into_response())
}
