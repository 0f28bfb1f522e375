//! HTTP DTOs for the print preview.

use serde::{Deserialize, Serialize};

pub use crate::application::handlers::GetPreviewResult as PreviewResponse;

use crate::domain::document::AcademicDocument;
use crate::domain::foundation::DocumentStatus;
use crate::ports::ExportFormat;

/// Request body for `PUT /api/preview/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeStatusResponse {
    pub document: AcademicDocument,
}

/// Query parameters for `GET /api/preview/export`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

impl ExportParams {
    pub fn format(&self) -> Result<ExportFormat, crate::ports::ExportError> {
        match &self.format {
            Some(format) => format.parse(),
            None => Ok(ExportFormat::default()),
        }
    }
}
