//! Search and type filtering over the document collection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::document::AcademicDocument;
use crate::domain::foundation::{DocumentType, ValidationError};

/// Type predicate for the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    /// Sentinel that bypasses the type predicate.
    #[default]
    All,
    Only(DocumentType),
}

impl TypeFilter {
    const ALL_KEY: &'static str = "all";

    /// Returns true if the document type passes this filter.
    pub fn accepts(&self, doc_type: DocumentType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(expected) => *expected == doc_type,
        }
    }

    /// Wire key: `all` or the document type key.
    pub fn key(&self) -> &'static str {
        match self {
            TypeFilter::All => Self::ALL_KEY,
            TypeFilter::Only(doc_type) => doc_type.key(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "All Types"),
            TypeFilter::Only(doc_type) => write!(f, "{}", doc_type),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL_KEY) {
            return Ok(TypeFilter::All);
        }
        s.parse::<DocumentType>().map(TypeFilter::Only)
    }
}

impl Serialize for TypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for TypeFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Combined dashboard filter: title search AND type predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default, rename = "type")]
    pub type_filter: TypeFilter,
}

impl DocumentFilter {
    pub fn new(search: impl Into<String>, type_filter: TypeFilter) -> Self {
        Self {
            search: search.into(),
            type_filter,
        }
    }

    /// Case-insensitive substring match on the title.
    pub fn matches_search(&self, document: &AcademicDocument) -> bool {
        document
            .title()
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// Returns true if the document passes both predicates.
    pub fn matches(&self, document: &AcademicDocument) -> bool {
        self.matches_search(document) && self.type_filter.accepts(document.doc_type())
    }

    /// Filters documents, preserving collection order.
    pub fn apply<'a>(&self, documents: &'a [AcademicDocument]) -> Vec<&'a AcademicDocument> {
        documents.iter().filter(|d| self.matches(d)).collect()
    }
}
