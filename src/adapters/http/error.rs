//! API error mapping shared by every HTTP area.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::ExportDocumentError;
use crate::domain::editor::EditorError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::workspace::WorkspaceError;
use crate::ports::ExportError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code, message),
        }
    }

    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    /// Unknown editor field name in a path segment.
    pub fn unknown_field(name: &str) -> Self {
        Self::bad_request(ErrorCode::UnknownField, format!("Unknown field: {}", name))
            .with_details(serde_json::json!({ "field": name }))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.body = self.body.with_details(details);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::bad_request(ErrorCode::ValidationFailed, error.to_string())
    }
}

impl From<WorkspaceError> for ApiError {
    fn from(error: WorkspaceError) -> Self {
        let status = match error {
            WorkspaceError::DocumentNotFound(_) | WorkspaceError::TemplateNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            WorkspaceError::NoDocumentSelected => StatusCode::CONFLICT,
        };
        ApiError::new(status, error.code(), error.to_string())
    }
}

impl From<EditorError> for ApiError {
    fn from(error: EditorError) -> Self {
        let status = match error {
            EditorError::MissingTitle => StatusCode::UNPROCESSABLE_ENTITY,
            EditorError::SectionBusy(_) | EditorError::NotOpen => StatusCode::CONFLICT,
        };
        ApiError::new(status, error.code(), error.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::UnsupportedFormat(_) | ExportError::InvalidInput(_) => {
                ApiError::bad_request(ErrorCode::ExportFailed, error.to_string())
            }
            ExportError::ServiceUnavailable(_) | ExportError::HtmlConversionFailed(_) => {
                tracing::error!(error = %error, "Document export failed");
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::ExportFailed,
                    error.to_string(),
                )
            }
        }
    }
}

impl From<ExportDocumentError> for ApiError {
    fn from(error: ExportDocumentError) -> Self {
        match error {
            ExportDocumentError::Workspace(err) => err.into(),
            ExportDocumentError::Export(err) => err.into(),
        }
    }
}
