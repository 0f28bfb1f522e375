//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Prefix shared by every document identifier.
const DOCUMENT_ID_PREFIX: &str = "doc_";

/// Unique identifier for an academic document within the session.
///
/// Seeded documents carry readable ids (`doc_001`); generated ones embed a
/// random UUID (`doc_4f0c...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new random DocumentId.
    pub fn generate() -> Self {
        Self(format!("{}{}", DOCUMENT_ID_PREFIX, Uuid::new_v4().simple()))
    }

    /// Creates a DocumentId from an existing value, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("document_id"));
        }
        Ok(Self(id))
    }

    /// Creates a DocumentId for built-in seed data.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short uppercase reference code printed on exported documents.
    pub fn reference_code(&self) -> String {
        self.0.chars().take(8).collect::<String>().to_uppercase()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of a curated template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Creates a new TemplateId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("template_id"));
        }
        Ok(Self(id))
    }

    /// Creates a TemplateId for the built-in catalog.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_generates_unique_values() {
        let id1 = DocumentId::generate();
        let id2 = DocumentId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_document_id_has_prefix() {
        let id = DocumentId::generate();
        assert!(id.as_str().starts_with("doc_"));
    }

    #[test]
    fn document_id_rejects_empty_string() {
        let result = DocumentId::new("  ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "document_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn document_id_parses_from_str() {
        let id: DocumentId = "doc_001".parse().unwrap();
        assert_eq!(id.as_str(), "doc_001");
        assert_eq!(id.to_string(), "doc_001");
    }

    #[test]
    fn reference_code_takes_first_eight_chars_uppercased() {
        let id = DocumentId::new("doc_abcdef123").unwrap();
        assert_eq!(id.reference_code(), "DOC_ABCD");

        let short = DocumentId::new("doc_1").unwrap();
        assert_eq!(short.reference_code(), "DOC_1");
    }

    #[test]
    fn document_id_serializes_transparently() {
        let id = DocumentId::new("doc_002").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"doc_002\"");
    }

    #[test]
    fn template_id_rejects_empty_string() {
        assert!(TemplateId::new("").is_err());
        assert_eq!(TemplateId::new("t1").unwrap().as_str(), "t1");
    }
}
