//! HTTP DTOs for the editor.

use serde::{Deserialize, Serialize};

pub use crate::application::{EditorState, GenerationOutcome};

use crate::domain::document::AcademicDocument;
use crate::domain::workspace::ViewState;

/// Request body for `PUT /api/editor/fields/:name`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFieldRequest {
    pub value: String,
}

/// Response for explicit saves.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    /// False when the document was no longer in the collection.
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<AcademicDocument>,
}

impl From<Option<AcademicDocument>> for SaveResponse {
    fn from(document: Option<AcademicDocument>) -> Self {
        Self {
            saved: document.is_some(),
            document,
        }
    }
}

/// Response for `POST /api/editor/preview`.
#[derive(Debug, Clone, Serialize)]
pub struct ContinueResponse {
    pub view: ViewState,
    #[serde(flatten)]
    pub save: SaveResponse,
}

/// Response for `POST /api/editor/sections/:section/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub outcome: GenerationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorState>,
}
