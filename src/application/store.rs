//! WorkspaceStore - the single-writer container around the session workspace.
//!
//! Every consumer (editor, handlers, HTTP layer) receives a clone of the
//! store; there is no global state. Mutations take the write lock for the
//! duration of one workspace operation and are never held across an await.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::AcademicDocument;
use crate::domain::foundation::{DocumentId, DocumentStatus};
use crate::domain::template::Template;
use crate::domain::workspace::{ViewState, Workspace, WorkspaceError};

/// Cloneable handle to the session workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    inner: Arc<RwLock<Workspace>>,
}

/// Point-in-time view of navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    pub view: ViewState,
    pub selected: Option<DocumentId>,
    pub document_count: usize,
}

impl WorkspaceStore {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(workspace)),
        }
    }

    /// A store seeded with the sample documents.
    pub fn seeded() -> Self {
        Self::new(Workspace::seeded())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Runs a read-only closure against the workspace.
    pub async fn read<R>(&self, f: impl FnOnce(&Workspace) -> R) -> R {
        let workspace = self.inner.read().await;
        f(&workspace)
    }

    pub async fn snapshot(&self) -> WorkspaceSnapshot {
        self.read(|ws| WorkspaceSnapshot {
            view: ws.current_view(),
            selected: ws.selected_id().cloned(),
            document_count: ws.documents().len(),
        })
        .await
    }

    pub async fn documents(&self) -> Vec<AcademicDocument> {
        self.read(|ws| ws.documents().to_vec()).await
    }

    pub async fn current_view(&self) -> ViewState {
        self.read(|ws| ws.current_view()).await
    }

    pub async fn selected_document(&self) -> Option<AcademicDocument> {
        self.read(|ws| ws.selected_document().cloned()).await
    }

    pub async fn find(&self, id: &DocumentId) -> Option<AcademicDocument> {
        self.read(|ws| ws.find(id).cloned()).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn navigate(&self, view: ViewState) {
        self.inner.write().await.navigate(view);
        tracing::info!(%view, "Navigated");
    }

    pub async fn edit_document(&self, id: &DocumentId) -> Result<AcademicDocument, WorkspaceError> {
        let document = self.inner.write().await.edit_document(id)?.clone();
        tracing::info!(document_id = %id, "Opened document for editing");
        Ok(document)
    }

    pub async fn create_from_template(&self, template: &Template) -> AcademicDocument {
        let document = self.inner.write().await.create_from_template(template).clone();
        tracing::info!(
            document_id = %document.id(),
            template_id = %template.id,
            doc_type = %document.doc_type(),
            "Created document from template"
        );
        document
    }

    /// Stores `updated`, returning the stored copy. Unknown ids are ignored.
    pub async fn update_document(&self, updated: AcademicDocument) -> Option<AcademicDocument> {
        let id = updated.id().clone();
        let stored = self.inner.write().await.update_document(updated);
        match &stored {
            Some(doc) => tracing::debug!(
                document_id = %id,
                last_modified = %doc.last_modified(),
                "Stored document update"
            ),
            None => tracing::debug!(document_id = %id, "Dropped update for unknown document"),
        }
        stored
    }

    pub async fn change_status(&self, status: DocumentStatus) -> Result<AcademicDocument, WorkspaceError> {
        let stored = self.inner.write().await.change_status(status)?;
        tracing::info!(document_id = %stored.id(), %status, "Changed document status");
        Ok(stored)
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::seeded()
    }
}
