//! GetPreviewHandler - Query handler for the print preview of the selected document.

use serde::Serialize;

use crate::application::WorkspaceStore;
use crate::domain::preview::{status_options, PreviewLayout, StatusOption};
use crate::domain::workspace::WorkspaceError;

/// Query for the preview of the currently selected document.
#[derive(Debug, Clone, Default)]
pub struct GetPreviewQuery;

/// Preview layout plus the status control options.
#[derive(Debug, Clone, Serialize)]
pub struct GetPreviewResult {
    pub layout: PreviewLayout,
    pub status_options: Vec<StatusOption>,
}

pub struct GetPreviewHandler {
    store: WorkspaceStore,
}

impl GetPreviewHandler {
    pub fn new(store: WorkspaceStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetPreviewQuery) -> Result<GetPreviewResult, WorkspaceError> {
        let document = self
            .store
            .selected_document()
            .await
            .ok_or(WorkspaceError::NoDocumentSelected)?;

        Ok(GetPreviewResult {
            layout: PreviewLayout::from_document(&document, document.last_modified()),
            status_options: status_options(document.status()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DocumentId, DocumentStatus};
    use crate::domain::preview::Stamp;

    #[tokio::test]
    async fn without_selection_reports_no_document() {
        let handler = GetPreviewHandler::new(WorkspaceStore::seeded());
        let result = handler.handle(GetPreviewQuery).await;
        assert_eq!(result.unwrap_err(), WorkspaceError::NoDocumentSelected);
    }

    #[tokio::test]
    async fn final_document_is_stamped_official() {
        let store = WorkspaceStore::seeded();
        store.edit_document(&DocumentId::new("doc_001").unwrap()).await.unwrap();

        let preview = GetPreviewHandler::new(store).handle(GetPreviewQuery).await.unwrap();

        assert_eq!(preview.layout.stamp, Stamp::Official);
        assert_eq!(preview.layout.reference, "Ref: DOC_001");
        let current: Vec<_> = preview
            .status_options
            .iter()
            .filter(|o| o.is_current)
            .map(|o| o.status)
            .collect();
        assert_eq!(current, vec![DocumentStatus::Final]);
    }

    #[tokio::test]
    async fn preview_follows_status_change() {
        let store = WorkspaceStore::seeded();
        store.edit_document(&DocumentId::new("doc_002").unwrap()).await.unwrap();
        let handler = GetPreviewHandler::new(store.clone());

        assert_eq!(
            handler.handle(GetPreviewQuery).await.unwrap().layout.stamp,
            Stamp::DraftCopy
        );

        store.change_status(DocumentStatus::Final).await.unwrap();
        assert_eq!(
            handler.handle(GetPreviewQuery).await.unwrap().layout.stamp,
            Stamp::Official
        );
    }
}
