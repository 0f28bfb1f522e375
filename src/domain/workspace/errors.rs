//! Workspace error types.

use thiserror::Error;

use crate::domain::foundation::{DocumentId, ErrorCode, TemplateId};

/// Errors raised by workspace operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("No document is selected")]
    NoDocumentSelected,

    #[error("Template not found: {0}")]
    TemplateNotFound(TemplateId),
}

impl WorkspaceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkspaceError::DocumentNotFound(_) => ErrorCode::DocumentNotFound,
            WorkspaceError::NoDocumentSelected => ErrorCode::NoDocumentSelected,
            WorkspaceError::TemplateNotFound(_) => ErrorCode::TemplateNotFound,
        }
    }
}
