//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the EduDoc domain.

mod document_status;
mod document_type;
mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use document_status::DocumentStatus;
pub use document_type::DocumentType;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{DocumentId, TemplateId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
