//! Editor session: a local editable copy of one document.
//!
//! Edits land on the draft only. The draft reaches the workspace when the
//! application layer pushes it (auto-save, explicit save, preview).

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

use crate::domain::document::{completion, AcademicDocument, ContentSection, FieldRef, TopLevelField};
use crate::domain::foundation::{DocumentId, Percentage};

use super::EditorError;

/// Identity of one opened editor. A new one is minted every time the editor opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EditorInstanceId(Uuid);

impl EditorInstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EditorInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EditorInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag attached to an in-flight generation request.
///
/// A result is only applied to the editor instance and document it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub instance: EditorInstanceId,
    pub document_id: DocumentId,
    pub section: ContentSection,
    /// Draft title at request time, used as the generation topic.
    pub topic: String,
}

/// The editor's local state for one open document.
#[derive(Debug, Clone)]
pub struct EditorSession {
    instance: EditorInstanceId,
    draft: AcademicDocument,
    generating: BTreeSet<ContentSection>,
}

impl EditorSession {
    /// Opens an editor on a copy of `document`.
    pub fn open(document: AcademicDocument) -> Self {
        Self {
            instance: EditorInstanceId::new(),
            draft: document,
            generating: BTreeSet::new(),
        }
    }

    pub fn instance(&self) -> EditorInstanceId {
        self.instance
    }

    pub fn document_id(&self) -> &DocumentId {
        self.draft.id()
    }

    pub fn draft(&self) -> &AcademicDocument {
        &self.draft
    }

    /// Completion of the draft.
    pub fn progress(&self) -> Percentage {
        completion(&self.draft)
    }

    pub fn is_generating(&self, section: ContentSection) -> bool {
        self.generating.contains(&section)
    }

    /// Sections with a request in flight, in document order.
    pub fn generating_sections(&self) -> Vec<ContentSection> {
        self.generating.iter().copied().collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_top_level_field(&mut self, field: TopLevelField, value: impl Into<String>) {
        self.draft.set_top_level(field, value);
    }

    pub fn set_content_field(&mut self, section: ContentSection, value: impl Into<String>) {
        self.draft.set_section(section, value);
    }

    pub fn set_field(&mut self, field: FieldRef, value: impl Into<String>) {
        match field {
            FieldRef::TopLevel(field) => self.set_top_level_field(field, value),
            FieldRef::Content(section) => self.set_content_field(section, value),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI assist
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks a section as generating and issues a ticket for the request.
    ///
    /// # Errors
    ///
    /// - `MissingTitle` if the draft has no title
    /// - `SectionBusy` if the section already has a request in flight
    pub fn begin_generation(&mut self, section: ContentSection) -> Result<GenerationTicket, EditorError> {
        if self.draft.title().is_empty() {
            return Err(EditorError::MissingTitle);
        }
        if !self.generating.insert(section) {
            return Err(EditorError::SectionBusy(section));
        }

        Ok(GenerationTicket {
            instance: self.instance,
            document_id: self.draft.id().clone(),
            section,
            topic: self.draft.title().to_string(),
        })
    }

    /// Applies a generation result if the ticket belongs to this session.
    ///
    /// The text overwrites the section unconditionally. Returns false when
    /// the ticket is stale (other instance or other document).
    pub fn complete_generation(&mut self, ticket: &GenerationTicket, text: impl Into<String>) -> bool {
        if ticket.instance != self.instance || &ticket.document_id != self.draft.id() {
            return false;
        }
        self.generating.remove(&ticket.section);
        self.draft.set_section(ticket.section, text);
        true
    }

    /// Clears the busy flag of a request that will never complete.
    pub fn abandon_generation(&mut self, ticket: &GenerationTicket) {
        if ticket.instance == self.instance {
            self.generating.remove(&ticket.section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DocumentType;

    fn session() -> EditorSession {
        EditorSession::open(AcademicDocument::blank(
            DocumentId::new("doc_edit").unwrap(),
            DocumentType::TeachingModule,
        ))
    }

    #[test]
    fn edits_touch_only_the_draft_field() {
        let mut s = session();
        s.set_top_level_field(TopLevelField::Title, "Cell Biology");
        s.set_content_field(ContentSection::Objectives, "Name organelles");
        assert_eq!(s.draft().title(), "Cell Biology");
        assert_eq!(s.draft().content().objectives, "Name organelles");
        assert_eq!(s.draft().content().outcomes, "");
    }

    #[test]
    fn set_field_dispatches_resolved_refs() {
        let mut s = session();
        s.set_field(FieldRef::resolve("semester").unwrap(), "Even");
        s.set_field(FieldRef::resolve("assessments").unwrap(), "Quiz");
        assert_eq!(s.draft().semester(), Some("Even"));
        assert_eq!(s.draft().content().assessments, "Quiz");
    }

    #[test]
    fn progress_tracks_draft() {
        let mut s = session();
        assert_eq!(s.progress().value(), 0);
        s.set_top_level_field(TopLevelField::Title, "T");
        s.set_content_field(ContentSection::Outcomes, "O");
        assert_eq!(s.progress().value(), 40);
    }

    #[test]
    fn generation_requires_title() {
        let mut s = session();
        assert_eq!(
            s.begin_generation(ContentSection::Outcomes).unwrap_err(),
            EditorError::MissingTitle
        );
        assert!(!s.is_generating(ContentSection::Outcomes));
    }

    #[test]
    fn whitespace_title_counts_as_a_title() {
        let mut s = session();
        s.set_top_level_field(TopLevelField::Title, "   ");
        assert_eq!(s.progress().value(), 20);

        let ticket = s.begin_generation(ContentSection::Outcomes).unwrap();
        assert_eq!(ticket.topic, "   ");
        assert!(s.is_generating(ContentSection::Outcomes));
    }

    #[test]
    fn generation_rejects_busy_section_but_allows_others() {
        let mut s = session();
        s.set_top_level_field(TopLevelField::Title, "Fractions");
        let ticket = s.begin_generation(ContentSection::Outcomes).unwrap();
        assert_eq!(ticket.topic, "Fractions");

        assert_eq!(
            s.begin_generation(ContentSection::Outcomes).unwrap_err(),
            EditorError::SectionBusy(ContentSection::Outcomes)
        );
        assert!(s.begin_generation(ContentSection::Activities).is_ok());
        assert_eq!(
            s.generating_sections(),
            vec![ContentSection::Outcomes, ContentSection::Activities]
        );
    }

    #[test]
    fn completion_overwrites_section_and_clears_flag() {
        let mut s = session();
        s.set_top_level_field(TopLevelField::Title, "Fractions");
        s.set_content_field(ContentSection::Outcomes, "typed by hand");
        let ticket = s.begin_generation(ContentSection::Outcomes).unwrap();

        assert!(s.complete_generation(&ticket, "- add fractions"));
        assert_eq!(s.draft().content().outcomes, "- add fractions");
        assert!(!s.is_generating(ContentSection::Outcomes));
    }

    #[test]
    fn abandoned_request_frees_section_without_touching_draft() {
        let mut s = session();
        s.set_top_level_field(TopLevelField::Title, "Fractions");
        let ticket = s.begin_generation(ContentSection::Outcomes).unwrap();

        s.abandon_generation(&ticket);

        assert!(!s.is_generating(ContentSection::Outcomes));
        assert_eq!(s.draft().content().outcomes, "");
        assert!(s.begin_generation(ContentSection::Outcomes).is_ok());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut first = session();
        first.set_top_level_field(TopLevelField::Title, "Fractions");
        let ticket = first.begin_generation(ContentSection::Outcomes).unwrap();

        let mut reopened = EditorSession::open(first.draft().clone());
        assert!(!reopened.complete_generation(&ticket, "late text"));
        assert_eq!(reopened.draft().content().outcomes, "");
    }
}
