//! Completion progress shown while editing.

use crate::domain::foundation::Percentage;

use super::AcademicDocument;

/// Fields tracked for progress: the title plus the four content sections.
pub const TRACKED_FIELDS: usize = 5;

/// Percentage of tracked fields that are non-empty, rounded to the nearest integer.
///
/// Display only; never stored on the document.
pub fn completion(document: &AcademicDocument) -> Percentage {
    Percentage::from_ratio(document.filled_field_count(), TRACKED_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{ContentSection, TopLevelField};
    use crate::domain::foundation::{DocumentId, DocumentType};

    fn blank() -> AcademicDocument {
        AcademicDocument::blank(DocumentId::generate(), DocumentType::TeachingModule)
    }

    #[test]
    fn empty_document_is_zero_percent() {
        assert_eq!(completion(&blank()).value(), 0);
    }

    #[test]
    fn title_and_outcomes_is_forty_percent() {
        let mut doc = blank();
        doc.set_top_level(TopLevelField::Title, "Cell Biology");
        doc.set_section(ContentSection::Outcomes, "Describe organelles");
        assert_eq!(completion(&doc).value(), 40);
    }

    #[test]
    fn all_fields_is_one_hundred_percent() {
        let mut doc = blank();
        doc.set_top_level(TopLevelField::Title, "Cell Biology");
        for section in ContentSection::ALL {
            doc.set_section(section, "filled");
        }
        assert_eq!(completion(&doc), Percentage::HUNDRED);
    }

    #[test]
    fn metadata_fields_do_not_count() {
        let mut doc = blank();
        doc.set_top_level(TopLevelField::ClassGrade, "Grade 7");
        doc.set_top_level(TopLevelField::Semester, "Even");
        assert_eq!(completion(&doc).value(), 0);
    }
}
