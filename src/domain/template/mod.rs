//! Template module - curated starting points for new documents.
//!
//! Templates are static seed data. They are never mutated at runtime; the
//! only thing a template contributes to a new document is its type.

mod catalog;

pub use catalog::TemplateCatalog;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentType, TemplateId};

/// A curated template shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Curated against the regional curriculum standard.
    pub is_verified: bool,
    pub thumbnail_url: String,
}

impl Template {
    /// Badge text shown on verified templates.
    pub const VERIFIED_BADGE: &'static str = "Batam Curriculum Standard";

    /// Badge for this template, if it has one.
    pub fn badge(&self) -> Option<&'static str> {
        self.is_verified.then_some(Self::VERIFIED_BADGE)
    }
}
