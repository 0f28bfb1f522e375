//! CreateFromTemplateHandler - Command handler for starting a new document.
//!
//! Creates a blank draft of the template's type, prepends it to the
//! collection, selects it and opens the editor on it.

use crate::application::Workbench;
use crate::domain::document::AcademicDocument;
use crate::domain::foundation::TemplateId;
use crate::domain::workspace::WorkspaceError;

/// Command to create a document from a catalog template.
#[derive(Debug, Clone)]
pub struct CreateFromTemplateCommand {
    pub template_id: TemplateId,
}

/// Result of successful document creation.
pub type CreateFromTemplateResult = AcademicDocument;

/// Handler for creating documents from templates.
pub struct CreateFromTemplateHandler {
    workbench: Workbench,
}

impl CreateFromTemplateHandler {
    pub fn new(workbench: Workbench) -> Self {
        Self { workbench }
    }

    pub async fn handle(
        &self,
        cmd: CreateFromTemplateCommand,
    ) -> Result<CreateFromTemplateResult, WorkspaceError> {
        self.workbench.create_from_template(&cmd.template_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::AiContentGenerator;
    use crate::application::editor::AutoSaveSettings;
    use crate::application::WorkspaceStore;
    use crate::domain::foundation::{DocumentStatus, DocumentType};
    use crate::domain::template::TemplateCatalog;
    use crate::domain::workspace::ViewState;
    use std::sync::Arc;

    fn handler() -> (CreateFromTemplateHandler, Workbench) {
        let workbench = Workbench::new(
            WorkspaceStore::seeded(),
            TemplateCatalog::standard(),
            Arc::new(AiContentGenerator::unavailable()),
            AutoSaveSettings::default(),
        );
        (CreateFromTemplateHandler::new(workbench.clone()), workbench)
    }

    fn cmd(id: &str) -> CreateFromTemplateCommand {
        CreateFromTemplateCommand {
            template_id: TemplateId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn creates_blank_draft_of_template_type() {
        let (handler, workbench) = handler();

        let created = handler.handle(cmd("t4")).await.unwrap();

        assert_eq!(created.doc_type(), DocumentType::LessonPlan);
        assert_eq!(created.status(), DocumentStatus::Draft);
        assert!(created.title().is_empty());
        assert!(created.content().is_empty());

        let documents = workbench.store().documents().await;
        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].id(), created.id());
        assert_eq!(workbench.store().current_view().await, ViewState::Editor);
    }

    #[tokio::test]
    async fn repeated_creation_yields_distinct_ids() {
        let (handler, workbench) = handler();

        let first = handler.handle(cmd("t1")).await.unwrap();
        let second = handler.handle(cmd("t1")).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(workbench.store().documents().await.len(), 4);
    }

    #[tokio::test]
    async fn unknown_template_is_rejected() {
        let (handler, workbench) = handler();

        let result = handler.handle(cmd("t99")).await;

        assert!(matches!(result, Err(WorkspaceError::TemplateNotFound(_))));
        assert_eq!(workbench.store().current_view().await, ViewState::Dashboard);
    }
}
