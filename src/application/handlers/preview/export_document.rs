//! ExportDocumentHandler - Renders the selected document for printing.
//!
//! The preview layout is rendered to Markdown; HTML output goes through the
//! export service, which adds print styling and the print-on-load script.

use std::sync::Arc;
use thiserror::Error;

use crate::application::WorkspaceStore;
use crate::domain::foundation::ErrorCode;
use crate::domain::preview::PreviewLayout;
use crate::domain::workspace::WorkspaceError;
use crate::ports::{DocumentExportService, ExportError, ExportFormat, ExportedDocument};

/// Query to export the currently selected document.
#[derive(Debug, Clone, Default)]
pub struct ExportDocumentQuery {
    pub format: ExportFormat,
}

pub type ExportDocumentResult = ExportedDocument;

#[derive(Debug, Error)]
pub enum ExportDocumentError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ExportDocumentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportDocumentError::Workspace(err) => err.code(),
            ExportDocumentError::Export(_) => ErrorCode::ExportFailed,
        }
    }
}

pub struct ExportDocumentHandler {
    store: WorkspaceStore,
    export_service: Arc<dyn DocumentExportService>,
}

impl ExportDocumentHandler {
    pub fn new(store: WorkspaceStore, export_service: Arc<dyn DocumentExportService>) -> Self {
        Self {
            store,
            export_service,
        }
    }

    pub async fn handle(
        &self,
        query: ExportDocumentQuery,
    ) -> Result<ExportDocumentResult, ExportDocumentError> {
        let document = self
            .store
            .selected_document()
            .await
            .ok_or(WorkspaceError::NoDocumentSelected)?;

        let layout = PreviewLayout::from_document(&document, document.last_modified());
        let markdown = layout.to_markdown();
        let filename = document.id().reference_code();

        let content = match query.format {
            ExportFormat::Markdown => markdown,
            ExportFormat::Html => self.export_service.to_html(&markdown, &layout.title).await?,
        };

        tracing::info!(document_id = %document.id(), format = %query.format, "Exported document");
        Ok(ExportedDocument::new(content, query.format, &filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::PulldownExportService;
    use crate::domain::foundation::DocumentId;
    use async_trait::async_trait;

    struct FailingExportService;

    #[async_trait]
    impl DocumentExportService for FailingExportService {
        async fn to_html(&self, _markdown: &str, _title: &str) -> Result<String, ExportError> {
            Err(ExportError::service_unavailable("offline"))
        }
    }

    async fn selected_store() -> WorkspaceStore {
        let store = WorkspaceStore::seeded();
        store.edit_document(&DocumentId::new("doc_001").unwrap()).await.unwrap();
        store
    }

    #[tokio::test]
    async fn html_export_is_a_printable_page() {
        let handler = ExportDocumentHandler::new(
            selected_store().await,
            Arc::new(PulldownExportService::new()),
        );

        let exported = handler.handle(ExportDocumentQuery::default()).await.unwrap();

        assert_eq!(exported.filename, "DOC_001.html");
        assert_eq!(exported.content_type, "text/html; charset=utf-8");
        assert!(exported.content.contains("Introduction to Biology: Cell Structure"));
        assert!(exported.content.contains("window.print"));
    }

    #[tokio::test]
    async fn markdown_export_skips_conversion() {
        let handler = ExportDocumentHandler::new(selected_store().await, Arc::new(FailingExportService));

        let exported = handler
            .handle(ExportDocumentQuery {
                format: ExportFormat::Markdown,
            })
            .await
            .unwrap();

        assert_eq!(exported.filename, "DOC_001.md");
        assert!(exported.content.contains("### 1. Learning Outcomes"));
        assert!(exported.content.contains("**OFFICIAL**"));
    }

    #[tokio::test]
    async fn conversion_failure_maps_to_export_code() {
        let handler = ExportDocumentHandler::new(selected_store().await, Arc::new(FailingExportService));

        let err = handler.handle(ExportDocumentQuery::default()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ExportFailed);
    }

    #[tokio::test]
    async fn export_without_selection_fails() {
        let handler = ExportDocumentHandler::new(
            WorkspaceStore::seeded(),
            Arc::new(PulldownExportService::new()),
        );

        let err = handler.handle(ExportDocumentQuery::default()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::NoDocumentSelected);
    }
}
