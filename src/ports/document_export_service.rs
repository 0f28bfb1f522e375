//! Document Export Service Port - Format conversion interface.
//!
//! This port defines the contract for turning a rendered Markdown layout
//! into a print-ready page. The application depends on this trait, while
//! adapters (like `PulldownExportService`) provide the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for exporting Markdown documents to other formats.
///
/// # Contract
///
/// Implementations must:
/// - Convert valid Markdown to a complete HTML document
/// - Preserve line breaks inside paragraphs
/// - Report clear errors for conversion failures
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Convert Markdown content to a complete HTML page.
    ///
    /// The page carries print styling and opens the browser's print dialog
    /// when loaded.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails.
    async fn to_html(&self, markdown: &str, title: &str) -> Result<String, ExportError>;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw Markdown (no conversion needed).
    Markdown,
    /// Print-ready HTML page.
    #[default]
    Html,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: String,
    pub content_type: &'static str,
    /// Suggested filename.
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: String, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("HTML conversion failed: {0}")]
    HtmlConversionFailed(String),

    #[error("Invalid markdown input: {0}")]
    InvalidInput(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn html_failed(reason: impl Into<String>) -> Self {
        Self::HtmlConversionFailed(reason.into())
    }
}
