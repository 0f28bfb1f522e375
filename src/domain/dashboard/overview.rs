//! Dashboard read model: collection-wide stats plus the filtered document table.

use serde::Serialize;

use crate::domain::document::AcademicDocument;
use crate::domain::foundation::{DocumentId, DocumentStatus, DocumentType, Timestamp};

use super::DocumentFilter;

/// Message rendered in place of an empty table body.
pub const EMPTY_STATE_MESSAGE: &str = "No documents found matching your criteria.";

/// The dashboard overview: aggregate counts plus the filtered table.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    /// Counts over the whole collection, not the filtered rows.
    pub stats: DashboardStats,

    /// The filter that produced `documents`
    pub filter: DocumentFilter,

    /// Filtered rows in collection order (newest created first)
    pub documents: Vec<DocumentRow>,

    /// Explicit empty-state indicator
    pub is_empty: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl DashboardOverview {
    /// Builds the overview for a collection and filter.
    pub fn build(documents: &[AcademicDocument], filter: DocumentFilter) -> Self {
        let rows: Vec<DocumentRow> = filter
            .apply(documents)
            .into_iter()
            .map(DocumentRow::from)
            .collect();
        let is_empty = rows.is_empty();

        Self {
            stats: DashboardStats::from_documents(documents),
            filter,
            documents: rows,
            is_empty,
            empty_message: is_empty.then_some(EMPTY_STATE_MESSAGE),
        }
    }
}

/// Aggregate counts shown on the stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub drafts: usize,
    /// Final or ready to print
    pub completed: usize,
}

impl DashboardStats {
    pub fn from_documents(documents: &[AcademicDocument]) -> Self {
        Self {
            total: documents.len(),
            drafts: documents
                .iter()
                .filter(|d| d.status() == DocumentStatus::Draft)
                .count(),
            completed: documents
                .iter()
                .filter(|d| d.status().is_completed())
                .count(),
        }
    }
}

/// One row of the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub type_label: &'static str,
    pub status: DocumentStatus,
    pub status_label: &'static str,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_grade: Option<String>,
    pub last_modified: Timestamp,
}

impl From<&AcademicDocument> for DocumentRow {
    fn from(document: &AcademicDocument) -> Self {
        Self {
            id: document.id().clone(),
            title: document.title().to_string(),
            doc_type: document.doc_type(),
            type_label: document.doc_type().label(),
            status: document.status(),
            status_label: document.status().label(),
            is_completed: document.status().is_completed(),
            class_grade: document.class_grade().map(str::to_string),
            last_modified: *document.last_modified(),
        }
    }
}
