//! Academic document aggregate.
//!
//! A document is a structured academic record (module, plan, report or
//! reflection) with a handful of metadata fields and four free-text content
//! sections.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentId, DocumentStatus, DocumentType, Timestamp};

use super::{ContentSection, TopLevelField};

/// The four free-text content sections of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocContent {
    pub outcomes: String,
    pub objectives: String,
    pub activities: String,
    pub assessments: String,
}

impl DocContent {
    /// Returns the text of a section.
    pub fn get(&self, section: ContentSection) -> &str {
        match section {
            ContentSection::Outcomes => &self.outcomes,
            ContentSection::Objectives => &self.objectives,
            ContentSection::Activities => &self.activities,
            ContentSection::Assessments => &self.assessments,
        }
    }

    /// Replaces the text of a section.
    pub fn set(&mut self, section: ContentSection, value: impl Into<String>) {
        let slot = match section {
            ContentSection::Outcomes => &mut self.outcomes,
            ContentSection::Objectives => &mut self.objectives,
            ContentSection::Activities => &mut self.activities,
            ContentSection::Assessments => &mut self.assessments,
        };
        *slot = value.into();
    }

    /// Returns true if every section is empty.
    pub fn is_empty(&self) -> bool {
        ContentSection::ALL.iter().all(|s| self.get(*s).is_empty())
    }

    /// Number of non-empty sections.
    pub fn filled_count(&self) -> usize {
        ContentSection::ALL
            .iter()
            .filter(|s| !self.get(**s).is_empty())
            .count()
    }
}

/// Academic document aggregate.
///
/// # Invariants
///
/// - `id` never changes once assigned
/// - `last_modified` is only advanced by the workspace when a mutation is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicDocument {
    id: DocumentId,
    title: String,
    #[serde(rename = "type")]
    doc_type: DocumentType,
    status: DocumentStatus,
    last_modified: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    curriculum_category: Option<String>,
    content: DocContent,
}

impl AcademicDocument {
    /// Creates an untitled draft with empty content.
    pub fn blank(id: DocumentId, doc_type: DocumentType) -> Self {
        Self {
            id,
            title: String::new(),
            doc_type,
            status: DocumentStatus::Draft,
            last_modified: Timestamp::now(),
            class_grade: None,
            semester: None,
            curriculum_category: None,
            content: DocContent::default(),
        }
    }

    /// Reconstitute a document from known values (seed data, fixtures).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DocumentId,
        title: String,
        doc_type: DocumentType,
        status: DocumentStatus,
        last_modified: Timestamp,
        class_grade: Option<String>,
        semester: Option<String>,
        content: DocContent,
    ) -> Self {
        Self {
            id,
            title,
            doc_type,
            status,
            last_modified,
            class_grade,
            semester,
            curriculum_category: None,
            content,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn last_modified(&self) -> &Timestamp {
        &self.last_modified
    }

    pub fn class_grade(&self) -> Option<&str> {
        self.class_grade.as_deref()
    }

    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }

    pub fn curriculum_category(&self) -> Option<&str> {
        self.curriculum_category.as_deref()
    }

    pub fn content(&self) -> &DocContent {
        &self.content
    }

    /// Returns the text of a top-level field (empty when unset).
    pub fn top_level(&self, field: TopLevelField) -> &str {
        match field {
            TopLevelField::Title => &self.title,
            TopLevelField::ClassGrade => self.class_grade().unwrap_or_default(),
            TopLevelField::Semester => self.semester().unwrap_or_default(),
            TopLevelField::CurriculumCategory => self.curriculum_category().unwrap_or_default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (local; stored through the workspace)
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets a top-level field. Empty values clear the optional fields.
    pub fn set_top_level(&mut self, field: TopLevelField, value: impl Into<String>) {
        let value = value.into();
        let optional = |v: String| if v.is_empty() { None } else { Some(v) };
        match field {
            TopLevelField::Title => self.title = value,
            TopLevelField::ClassGrade => self.class_grade = optional(value),
            TopLevelField::Semester => self.semester = optional(value),
            TopLevelField::CurriculumCategory => self.curriculum_category = optional(value),
        }
    }

    /// Replaces the text of a content section.
    pub fn set_section(&mut self, section: ContentSection, value: impl Into<String>) {
        self.content.set(section, value);
    }

    /// Sets the workflow status.
    pub fn set_status(&mut self, status: DocumentStatus) {
        self.status = status;
    }

    /// Returns a copy with a different status.
    pub fn with_status(&self, status: DocumentStatus) -> Self {
        let mut copy = self.clone();
        copy.set_status(status);
        copy
    }

    /// Stamps a modification time strictly later than `previous`.
    pub(crate) fn stamp_modified_after(&mut self, previous: &Timestamp) {
        let floor = *previous.max(&self.last_modified);
        self.last_modified = Timestamp::now_after(&floor);
    }

    /// Number of tracked fields (title plus content sections) that are filled.
    pub fn filled_field_count(&self) -> usize {
        usize::from(!self.title.is_empty()) + self.content.filled_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> AcademicDocument {
        AcademicDocument::blank(DocumentId::new("doc_test").unwrap(), DocumentType::LessonPlan)
    }

    #[test]
    fn blank_document_is_untitled_draft_with_empty_content() {
        let d = doc();
        assert_eq!(d.title(), "");
        assert_eq!(d.status(), DocumentStatus::Draft);
        assert_eq!(d.doc_type(), DocumentType::LessonPlan);
        assert!(d.content().is_empty());
        assert_eq!(d.class_grade(), None);
    }

    #[test]
    fn set_top_level_updates_title_and_optional_fields() {
        let mut d = doc();
        d.set_top_level(TopLevelField::Title, "Photosynthesis");
        d.set_top_level(TopLevelField::ClassGrade, "Grade 8");
        assert_eq!(d.title(), "Photosynthesis");
        assert_eq!(d.class_grade(), Some("Grade 8"));
        assert_eq!(d.top_level(TopLevelField::ClassGrade), "Grade 8");

        d.set_top_level(TopLevelField::ClassGrade, "");
        assert_eq!(d.class_grade(), None);
    }

    #[test]
    fn set_section_only_touches_that_section() {
        let mut d = doc();
        d.set_section(ContentSection::Activities, "Group work");
        assert_eq!(d.content().activities, "Group work");
        assert_eq!(d.content().outcomes, "");
        assert_eq!(d.content().filled_count(), 1);
    }

    #[test]
    fn stamp_modified_after_is_strictly_later() {
        let mut d = doc();
        let before = *d.last_modified();
        d.stamp_modified_after(&before);
        assert!(d.last_modified().is_after(&before));
    }

    #[test]
    fn filled_field_count_counts_title_and_sections() {
        let mut d = doc();
        assert_eq!(d.filled_field_count(), 0);
        d.set_top_level(TopLevelField::Title, "Cells");
        d.set_section(ContentSection::Outcomes, "Understand cells");
        assert_eq!(d.filled_field_count(), 2);
    }

    #[test]
    fn with_status_keeps_id_and_content() {
        let mut d = doc();
        d.set_section(ContentSection::Outcomes, "x");
        let finalized = d.with_status(DocumentStatus::Final);
        assert_eq!(finalized.id(), d.id());
        assert_eq!(finalized.content(), d.content());
        assert_eq!(finalized.status(), DocumentStatus::Final);
    }

    #[test]
    fn serializes_with_type_key_and_iso_timestamp() {
        let d = AcademicDocument::reconstitute(
            DocumentId::new("doc_001").unwrap(),
            "Cells".to_string(),
            DocumentType::TeachingModule,
            DocumentStatus::Final,
            Timestamp::parse_rfc3339("2023-10-24T10:30:00Z").unwrap(),
            Some("Grade 10".to_string()),
            None,
            DocContent::default(),
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["type"], "teaching_module");
        assert_eq!(json["status"], "final");
        assert_eq!(json["class_grade"], "Grade 10");
        assert!(json.get("semester").is_none());
        assert!(json["last_modified"].as_str().unwrap().starts_with("2023-10-24T10:30:00"));
    }
}
