use thiserror::Error;

use crate::domain::document::ContentSection;
use crate::domain::foundation::ErrorCode;

/// Errors raised by editor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Blocking prompt shown when AI assist is requested on an untitled draft.
    #[error("Please enter a document title first so the assistant can understand the context.")]
    MissingTitle,

    #[error("Content for '{0}' is already being generated")]
    SectionBusy(ContentSection),

    #[error("No document is open in the editor")]
    NotOpen,
}

impl EditorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EditorError::MissingTitle => ErrorCode::MissingTitle,
            EditorError::SectionBusy(_) => ErrorCode::SectionBusy,
            EditorError::NotOpen => ErrorCode::EditorNotOpen,
        }
    }
}
