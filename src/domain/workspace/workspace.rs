//! The workspace: document collection, selection and active view.
//!
//! This is the single source of truth for the session. Every mutation of
//! the collection goes through [`Workspace::update_document`] or
//! [`Workspace::create_from_template`].

use crate::domain::document::AcademicDocument;
use crate::domain::foundation::{DocumentId, DocumentStatus};
use crate::domain::template::Template;

use super::{sample_documents, ViewState, WorkspaceError};

/// Session state: documents newest-first, the selected document and the active view.
///
/// # Invariants
///
/// - document ids are unique
/// - the collection only grows; updates never reorder it
/// - `selected`, when set, names a document in the collection
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    documents: Vec<AcademicDocument>,
    selected: Option<DocumentId>,
    view: ViewState,
}

impl Workspace {
    /// Creates a workspace over an initial collection, on the dashboard.
    pub fn new(documents: Vec<AcademicDocument>) -> Self {
        Self {
            documents,
            selected: None,
            view: ViewState::Dashboard,
        }
    }

    /// Creates a workspace seeded with the sample documents.
    pub fn seeded() -> Self {
        Self::new(sample_documents())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn documents(&self) -> &[AcademicDocument] {
        &self.documents
    }

    pub fn current_view(&self) -> ViewState {
        self.view
    }

    pub fn selected_id(&self) -> Option<&DocumentId> {
        self.selected.as_ref()
    }

    /// The selected document, resolved against the current collection.
    pub fn selected_document(&self) -> Option<&AcademicDocument> {
        self.selected.as_ref().and_then(|id| self.find(id))
    }

    pub fn find(&self, id: &DocumentId) -> Option<&AcademicDocument> {
        self.documents.iter().find(|d| d.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the active view. Documents and selection are untouched.
    pub fn navigate(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Selects a document and opens the editor on it.
    pub fn edit_document(&mut self, id: &DocumentId) -> Result<&AcademicDocument, WorkspaceError> {
        let index = self
            .position(id)
            .ok_or_else(|| WorkspaceError::DocumentNotFound(id.clone()))?;
        self.selected = Some(id.clone());
        self.view = ViewState::Editor;
        Ok(&self.documents[index])
    }

    /// Creates a blank draft of the template's type, prepends it, selects it
    /// and opens the editor.
    pub fn create_from_template(&mut self, template: &Template) -> &AcademicDocument {
        let mut id = DocumentId::generate();
        while self.position(&id).is_some() {
            id = DocumentId::generate();
        }

        let document = AcademicDocument::blank(id.clone(), template.doc_type);
        self.documents.insert(0, document);
        self.selected = Some(id);
        self.view = ViewState::Editor;
        &self.documents[0]
    }

    /// Replaces the document with the same id, refreshing its timestamp.
    ///
    /// Returns the stored copy, or `None` when no document has that id (in
    /// which case nothing changes).
    pub fn update_document(&mut self, mut updated: AcademicDocument) -> Option<AcademicDocument> {
        let index = self.position(updated.id())?;
        let previous = *self.documents[index].last_modified();
        updated.stamp_modified_after(&previous);
        self.documents[index] = updated;
        Some(self.documents[index].clone())
    }

    /// Changes the status of the selected document.
    pub fn change_status(&mut self, status: DocumentStatus) -> Result<AcademicDocument, WorkspaceError> {
        let current = self
            .selected_document()
            .ok_or(WorkspaceError::NoDocumentSelected)?;
        let id = current.id().clone();
        let updated = current.with_status(status);
        self.update_document(updated)
            .ok_or(WorkspaceError::DocumentNotFound(id))
    }

    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id() == id)
    }
}
