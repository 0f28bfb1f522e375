//! Command and query handlers.
//!
//! Commands mutate the workspace through the `Workbench`; queries read
//! from the `WorkspaceStore`.

pub mod dashboard;
pub mod document;
pub mod preview;

pub use dashboard::{GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetDashboardOverviewResult};
pub use document::{CreateFromTemplateCommand, CreateFromTemplateHandler, CreateFromTemplateResult};
pub use preview::{
    ExportDocumentError, ExportDocumentHandler, ExportDocumentQuery, ExportDocumentResult,
    GetPreviewHandler, GetPreviewQuery, GetPreviewResult,
};
