//! EditorController - one open editor bound to the workspace store.
//!
//! The controller owns the editor's local draft and its auto-save timer.
//! Edits mutate the draft and restart the timer; the timer, an explicit
//! save, or leaving for the preview push the draft into the store.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::document::{AcademicDocument, ContentSection, FieldRef, TopLevelField};
use crate::domain::editor::{EditorError, EditorInstanceId, EditorSession, GenerationTicket};
use crate::domain::foundation::{DocumentId, Percentage};

use super::{AutoSaveScheduler, AutoSaveSettings};
use crate::application::WorkspaceStore;

/// What the editor view renders.
#[derive(Debug, Clone, Serialize)]
pub struct EditorState {
    pub instance: EditorInstanceId,
    pub document: AcademicDocument,
    pub progress: Percentage,
    pub is_auto_saving: bool,
    pub has_unsaved_changes: bool,
    pub generating: Vec<ContentSection>,
}

/// An open editor on one document.
pub struct EditorController {
    store: WorkspaceStore,
    session: Arc<Mutex<EditorSession>>,
    autosave: AutoSaveScheduler,
    instance: EditorInstanceId,
    document_id: DocumentId,
    closed: AtomicBool,
}

impl EditorController {
    /// Opens an editor on a copy of `document`.
    pub fn open(store: WorkspaceStore, document: AcademicDocument, settings: AutoSaveSettings) -> Self {
        let session = EditorSession::open(document);
        let instance = session.instance();
        let document_id = session.document_id().clone();
        tracing::debug!(%instance, %document_id, "Editor opened");

        Self {
            store,
            session: Arc::new(Mutex::new(session)),
            autosave: AutoSaveScheduler::new(settings),
            instance,
            document_id,
            closed: AtomicBool::new(false),
        }
    }

    pub fn instance(&self) -> EditorInstanceId {
        self.instance
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// True for the indicator window after an auto-save.
    pub fn is_auto_saving(&self) -> bool {
        self.autosave.is_indicating()
    }

    pub async fn state(&self) -> EditorState {
        let session = self.session.lock().await;
        EditorState {
            instance: self.instance,
            document: session.draft().clone(),
            progress: session.progress(),
            is_auto_saving: self.autosave.is_indicating(),
            has_unsaved_changes: self.autosave.is_pending(),
            generating: session.generating_sections(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies an edit to the draft and restarts the auto-save window.
    pub async fn edit(&self, field: FieldRef, value: impl Into<String>) -> Result<EditorState, EditorError> {
        if self.is_closed() {
            return Err(EditorError::NotOpen);
        }
        self.session.lock().await.set_field(field, value);
        self.schedule_autosave();
        Ok(self.state().await)
    }

    pub async fn set_top_level_field(
        &self,
        field: TopLevelField,
        value: impl Into<String>,
    ) -> Result<EditorState, EditorError> {
        self.edit(FieldRef::TopLevel(field), value).await
    }

    pub async fn set_content_field(
        &self,
        section: ContentSection,
        value: impl Into<String>,
    ) -> Result<EditorState, EditorError> {
        self.edit(FieldRef::Content(section), value).await
    }

    /// Pushes the draft immediately, cancelling any pending auto-save.
    pub async fn save_now(&self) -> Option<AcademicDocument> {
        self.autosave.cancel();
        let draft = self.session.lock().await.draft().clone();
        self.store.update_document(draft).await
    }

    /// Tears the editor down. Pending auto-saves and late generation results are dropped.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.autosave.cancel();
        tracing::debug!(instance = %self.instance, document_id = %self.document_id, "Editor closed");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI assist
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks `section` as generating and returns the ticket for the request.
    pub async fn begin_generation(&self, section: ContentSection) -> Result<GenerationTicket, EditorError> {
        if self.is_closed() {
            return Err(EditorError::NotOpen);
        }
        self.session.lock().await.begin_generation(section)
    }

    /// Applies a generation result. Returns false when it was discarded.
    ///
    /// An applied result counts as an edit and restarts the auto-save window.
    pub async fn complete_generation(&self, ticket: &GenerationTicket, text: impl Into<String>) -> bool {
        if self.is_closed() {
            return false;
        }
        let applied = self.session.lock().await.complete_generation(ticket, text);
        if applied {
            self.schedule_autosave();
        }
        applied
    }

    /// Frees the section of a request whose result will never arrive.
    pub async fn abandon_generation(&self, ticket: &GenerationTicket) {
        self.session.lock().await.abandon_generation(ticket);
    }

    fn schedule_autosave(&self) {
        let session = Arc::clone(&self.session);
        let store = self.store.clone();
        self.autosave.schedule(move || async move {
            let draft = session.lock().await.draft().clone();
            let stored = store.update_document(draft).await.is_some();
            if stored {
                tracing::debug!("Auto-saved draft");
            }
            stored
        });
    }
}

impl Drop for EditorController {
    fn drop(&mut self) {
        self.autosave.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast() -> AutoSaveSettings {
        AutoSaveSettings {
            debounce: Duration::from_millis(40),
            indicator: Duration::from_millis(300),
        }
    }

    async fn open_on(store: &WorkspaceStore, id: &str) -> EditorController {
        let doc = store
            .edit_document(&DocumentId::new(id).unwrap())
            .await
            .unwrap();
        EditorController::open(store.clone(), doc, fast())
    }

    #[tokio::test]
    async fn edits_stay_local_until_debounce_elapses() {
        let store = WorkspaceStore::seeded();
        let editor = open_on(&store, "doc_002").await;

        let state = editor
            .set_top_level_field(TopLevelField::Title, "Algebra Review")
            .await
            .unwrap();
        assert_eq!(state.document.title(), "Algebra Review");
        assert!(state.has_unsaved_changes);

        let stored = store.find(editor.document_id()).await.unwrap();
        assert_eq!(stored.title(), "Weekly Reflection: Algebra Unit");

        tokio::time::sleep(Duration::from_millis(150)).await;

        let stored = store.find(editor.document_id()).await.unwrap();
        assert_eq!(stored.title(), "Algebra Review");
        assert!(editor.is_auto_saving());
    }

    #[tokio::test]
    async fn burst_of_edits_saves_latest_draft() {
        let store = WorkspaceStore::seeded();
        let editor = open_on(&store, "doc_002").await;

        for text in ["S", "So", "Sol", "Solve"] {
            editor
                .set_content_field(ContentSection::Outcomes, text)
                .await
                .unwrap();
        }
        tokio::time::sleep(Duration::from_millis(150)).await;

        let stored = store.find(editor.document_id()).await.unwrap();
        assert_eq!(stored.content().outcomes, "Solve");
    }

    #[tokio::test]
    async fn save_now_pushes_immediately() {
        let store = WorkspaceStore::seeded();
        let editor = open_on(&store, "doc_002").await;
        let before = store.find(editor.document_id()).await.unwrap();

        editor
            .set_content_field(ContentSection::Assessments, "Exit ticket")
            .await
            .unwrap();
        let stored = editor.save_now().await.unwrap();

        assert_eq!(stored.content().assessments, "Exit ticket");
        assert!(stored.last_modified().is_after(before.last_modified()));
        assert!(!editor.state().await.has_unsaved_changes);
    }

    #[tokio::test]
    async fn close_cancels_pending_autosave() {
        let store = WorkspaceStore::seeded();
        let editor = open_on(&store, "doc_002").await;

        editor
            .set_top_level_field(TopLevelField::Title, "Never stored")
            .await
            .unwrap();
        editor.close();
        tokio::time::sleep(Duration::from_millis(150)).await;

        let stored = store.find(editor.document_id()).await.unwrap();
        assert_eq!(stored.title(), "Weekly Reflection: Algebra Unit");
        assert_eq!(
            editor
                .set_top_level_field(TopLevelField::Title, "x")
                .await
                .unwrap_err(),
            EditorError::NotOpen
        );
    }

    #[tokio::test]
    async fn generation_result_applies_and_restarts_autosave() {
        let store = WorkspaceStore::seeded();
        let editor = open_on(&store, "doc_002").await;

        let ticket = editor.begin_generation(ContentSection::Objectives).await.unwrap();
        assert_eq!(editor.state().await.generating, vec![ContentSection::Objectives]);

        assert!(editor.complete_generation(&ticket, "- Factor quadratics").await);
        assert!(editor.state().await.generating.is_empty());

        tokio::time::sleep(Duration::from_millis(150)).await;
        let stored = store.find(editor.document_id()).await.unwrap();
        assert_eq!(stored.content().objectives, "- Factor quadratics");
    }

    #[tokio::test]
    async fn generation_result_after_close_is_discarded() {
        let store = WorkspaceStore::seeded();
        let editor = open_on(&store, "doc_001").await;

        let ticket = editor.begin_generation(ContentSection::Outcomes).await.unwrap();
        editor.close();

        assert!(!editor.complete_generation(&ticket, "late").await);
        tokio::time::sleep(Duration::from_millis(100)).await;
        let stored = store.find(editor.document_id()).await.unwrap();
        assert_ne!(stored.content().outcomes, "late");
    }
}
