//! Workbench - top-level composition of the store, catalog, generator and editor.
//!
//! The workbench owns the only open editor. Navigating away from the editor
//! view tears it down (cancelling its auto-save); opening a document or
//! creating one from a template replaces it.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::document::{AcademicDocument, ContentSection, FieldRef};
use crate::domain::editor::{EditorError, GenerationTicket};
use crate::domain::foundation::{DocumentId, DocumentStatus, TemplateId};
use crate::domain::template::TemplateCatalog;
use crate::domain::workspace::{ViewState, WorkspaceError};
use crate::ports::ContentGenerator;

use super::editor::{AutoSaveSettings, EditorController, EditorState};
use super::WorkspaceStore;

/// Result of an AI-assist request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub section: ContentSection,
    /// False when the editor was closed or reopened before the result arrived.
    pub applied: bool,
    pub text: String,
}

/// Cloneable handle to the running application.
#[derive(Clone)]
pub struct Workbench {
    store: WorkspaceStore,
    catalog: Arc<TemplateCatalog>,
    generator: Arc<dyn ContentGenerator>,
    autosave: AutoSaveSettings,
    editor: Arc<Mutex<Option<Arc<EditorController>>>>,
}

impl Workbench {
    pub fn new(
        store: WorkspaceStore,
        catalog: TemplateCatalog,
        generator: Arc<dyn ContentGenerator>,
        autosave: AutoSaveSettings,
    ) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
            generator,
            autosave,
            editor: Arc::new(Mutex::new(None)),
        }
    }

    pub fn store(&self) -> &WorkspaceStore {
        &self.store
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Switches the active view, opening or tearing down the editor to match.
    pub async fn navigate(&self, view: ViewState) {
        if view == ViewState::Editor {
            self.ensure_editor_open().await;
        } else {
            self.close_editor().await;
        }
        self.store.navigate(view).await;
    }

    /// Dashboard row click: select a document and edit it.
    pub async fn edit_document(&self, id: &DocumentId) -> Result<AcademicDocument, WorkspaceError> {
        let document = self.store.edit_document(id).await?;
        self.replace_editor(document.clone()).await;
        Ok(document)
    }

    /// Gallery selection: create a blank draft from a template and edit it.
    pub async fn create_from_template(&self, template_id: &TemplateId) -> Result<AcademicDocument, WorkspaceError> {
        let template = self
            .catalog
            .find(template_id)
            .ok_or_else(|| WorkspaceError::TemplateNotFound(template_id.clone()))?;
        let document = self.store.create_from_template(template).await;
        self.replace_editor(document.clone()).await;
        Ok(document)
    }

    /// Status control in the preview.
    pub async fn change_status(&self, status: DocumentStatus) -> Result<AcademicDocument, WorkspaceError> {
        self.store.change_status(status).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editor
    // ─────────────────────────────────────────────────────────────────────────

    /// The open editor.
    pub async fn editor(&self) -> Result<Arc<EditorController>, EditorError> {
        self.editor.lock().await.clone().ok_or(EditorError::NotOpen)
    }

    pub async fn editor_state(&self) -> Result<EditorState, EditorError> {
        Ok(self.editor().await?.state().await)
    }

    pub async fn edit_field(&self, field: FieldRef, value: String) -> Result<EditorState, EditorError> {
        self.editor().await?.edit(field, value).await
    }

    /// Explicit save from the editor.
    pub async fn save_editor(&self) -> Result<Option<AcademicDocument>, EditorError> {
        Ok(self.editor().await?.save_now().await)
    }

    /// Saves the draft immediately and switches to the preview.
    pub async fn continue_to_preview(&self) -> Result<Option<AcademicDocument>, EditorError> {
        let stored = self.editor().await?.save_now().await;
        self.navigate(ViewState::Preview).await;
        Ok(stored)
    }

    /// AI assist for one section of the open editor.
    ///
    /// The generator runs in its own task, so a caller that stops waiting
    /// does not leave the section busy. The result is applied only if the
    /// same editor is still open when it arrives.
    pub async fn generate_section(&self, section: ContentSection) -> Result<GenerationOutcome, EditorError> {
        let ticket = self.editor().await?.begin_generation(section).await?;
        tracing::info!(document_id = %ticket.document_id, %section, "Generating section content");

        let task = tokio::spawn({
            let this = self.clone();
            let ticket = ticket.clone();
            async move { this.finish_generation(ticket).await }
        });
        match task.await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::error!(document_id = %ticket.document_id, %section, error = %err, "Generation task failed");
                if let Ok(current) = self.editor().await {
                    current.abandon_generation(&ticket).await;
                }
                Ok(GenerationOutcome {
                    section,
                    applied: false,
                    text: String::new(),
                })
            }
        }
    }

    async fn finish_generation(&self, ticket: GenerationTicket) -> GenerationOutcome {
        let text = self.generator.generate(&ticket.topic, ticket.section).await;

        let applied = match self.editor().await {
            Ok(current) if current.instance() == ticket.instance => {
                current.complete_generation(&ticket, text.clone()).await
            }
            _ => false,
        };
        if !applied {
            tracing::warn!(
                document_id = %ticket.document_id,
                section = %ticket.section,
                "Discarded generation result for a closed editor"
            );
        }

        GenerationOutcome {
            section: ticket.section,
            applied,
            text,
        }
    }

    async fn replace_editor(&self, document: AcademicDocument) {
        let controller = Arc::new(EditorController::open(
            self.store.clone(),
            document,
            self.autosave,
        ));
        if let Some(previous) = self.editor.lock().await.replace(controller) {
            previous.close();
        }
    }

    async fn ensure_editor_open(&self) {
        let Some(selected) = self.store.selected_document().await else {
            return;
        };
        let mut slot = self.editor.lock().await;
        let already_open = slot
            .as_ref()
            .is_some_and(|editor| editor.document_id() == selected.id());
        if !already_open {
            let controller = EditorController::open(self.store.clone(), selected, self.autosave);
            if let Some(previous) = slot.replace(Arc::new(controller)) {
                previous.close();
            }
        }
    }

    async fn close_editor(&self) {
        if let Some(editor) = self.editor.lock().await.take() {
            editor.close();
        }
    }
}
