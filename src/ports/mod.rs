//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Raw completion calls to a hosted model
//! - `ContentGenerator` - Section drafting for the editor (never fails)
//! - `DocumentExportService` - Markdown to print-ready HTML

mod ai_provider;
mod content_generator;
mod document_export_service;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message, MessageRole,
    ProviderInfo, TokenUsage,
};
pub use content_generator::ContentGenerator;
pub use document_export_service::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument,
};
