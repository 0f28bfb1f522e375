//! HTTP DTOs for workspace navigation.

use serde::{Deserialize, Serialize};

use crate::application::WorkspaceSnapshot;
use crate::domain::document::AcademicDocument;
use crate::domain::foundation::DocumentId;
use crate::domain::workspace::ViewState;

/// Request body for `POST /api/workspace/navigate`.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub view: ViewState,
}

/// Current view and selection.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceResponse {
    pub view: ViewState,
    pub selected_document_id: Option<DocumentId>,
    pub document_count: usize,
    /// True when the view needs a selected document but none is selected.
    pub selection_missing: bool,
}

impl From<WorkspaceSnapshot> for WorkspaceResponse {
    fn from(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            selection_missing: snapshot.view.needs_selection() && snapshot.selected.is_none(),
            view: snapshot.view,
            selected_document_id: snapshot.selected,
            document_count: snapshot.document_count,
        }
    }
}

/// Response for `POST /api/documents/:id/edit`.
#[derive(Debug, Clone, Serialize)]
pub struct EditDocumentResponse {
    pub view: ViewState,
    pub document: AcademicDocument,
}
