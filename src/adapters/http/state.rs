//! Shared application state for all HTTP areas.

use std::sync::Arc;

use crate::application::handlers::{
    CreateFromTemplateHandler, ExportDocumentHandler, GetDashboardOverviewHandler, GetPreviewHandler,
};
use crate::application::{Workbench, WorkspaceStore};
use crate::ports::DocumentExportService;

/// State injected into every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub workbench: Workbench,
    pub export_service: Arc<dyn DocumentExportService>,
}

impl AppState {
    pub fn new(workbench: Workbench, export_service: Arc<dyn DocumentExportService>) -> Self {
        Self {
            workbench,
            export_service,
        }
    }

    pub fn store(&self) -> &WorkspaceStore {
        self.workbench.store()
    }

    pub fn dashboard_overview_handler(&self) -> GetDashboardOverviewHandler {
        GetDashboardOverviewHandler::new(self.store().clone())
    }

    pub fn create_from_template_handler(&self) -> CreateFromTemplateHandler {
        CreateFromTemplateHandler::new(self.workbench.clone())
    }

    pub fn preview_handler(&self) -> GetPreviewHandler {
        GetPreviewHandler::new(self.store().clone())
    }

    pub fn export_handler(&self) -> ExportDocumentHandler {
        ExportDocumentHandler::new(self.store().clone(), self.export_service.clone())
    }
}
