//! Document adapters - Export of rendered documents.
//!
//! - `PulldownExportService` - Markdown to print-ready HTML via pulldown-cmark

mod pulldown_export_service;

pub use pulldown_export_service::PulldownExportService;
