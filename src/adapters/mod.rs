//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Gemini provider, mock provider and the section content generator
//! - `document` - Markdown to print-ready HTML export
//! - `http` - axum REST API

pub mod ai;
pub mod document;
pub mod http;
