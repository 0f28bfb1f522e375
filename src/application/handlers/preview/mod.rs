//! Preview query handlers.

mod export_document;
mod get_preview;

pub use export_document::{
    ExportDocumentError, ExportDocumentHandler, ExportDocumentQuery, ExportDocumentResult,
};
pub use get_preview::{GetPreviewHandler, GetPreviewQuery, GetPreviewResult};
