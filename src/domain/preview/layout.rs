//! Print layout of a document: letterhead, metadata, sections and signatures.

use serde::Serialize;
use std::fmt::Write;

use crate::domain::document::{AcademicDocument, ContentSection};
use crate::domain::foundation::{DocumentId, DocumentStatus, Timestamp};

/// Title shown when the document has none.
pub const UNTITLED: &str = "Untitled Document";

/// Value shown for unset metadata.
const MISSING: &str = "-";

/// Fixed institutional letterhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letterhead {
    pub seal: &'static str,
    pub institution: &'static str,
    pub subtitle: &'static str,
}

impl Letterhead {
    pub const STANDARD: Letterhead = Letterhead {
        seal: "SC",
        institution: "School Curriculum Standard",
        subtitle: "Official Academic Document • Batam Region",
    };
}

/// Status stamp printed in the top corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stamp {
    Official,
    DraftCopy,
}

impl Stamp {
    /// Only final documents are stamped official.
    pub fn for_status(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Final => Stamp::Official,
            DocumentStatus::Draft | DocumentStatus::ReadyToPrint => Stamp::DraftCopy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stamp::Official => "OFFICIAL",
            Stamp::DraftCopy => "DRAFT COPY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub section: ContentSection,
    pub heading: String,
    /// Section text, `None` when empty.
    pub body: Option<String>,
    pub placeholder: &'static str,
}

impl PreviewSection {
    /// Text to print: the body, or the placeholder when empty.
    pub fn display_text(&self) -> &str {
        self.body.as_deref().unwrap_or(self.placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureBlock {
    pub role: &'static str,
    pub caption: &'static str,
}

const SIGNATURES: [SignatureBlock; 2] = [
    SignatureBlock {
        role: "Acknowledged by, Principal",
        caption: "(Signature & Stamp)",
    },
    SignatureBlock {
        role: "Prepared by, Subject Teacher",
        caption: "(Name & Signature)",
    },
];

/// The complete print layout for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLayout {
    pub document_id: DocumentId,
    pub letterhead: Letterhead,
    pub stamp: Stamp,
    pub stamp_label: &'static str,
    pub reference: String,
    pub title: String,
    pub metadata: Vec<MetadataItem>,
    pub sections: Vec<PreviewSection>,
    pub signatures: Vec<SignatureBlock>,
}

impl PreviewLayout {
    /// Builds the layout of `document` as printed on `date`.
    pub fn from_document(document: &AcademicDocument, date: &Timestamp) -> Self {
        let or_missing = |value: Option<&str>| value.unwrap_or(MISSING).to_string();
        let stamp = Stamp::for_status(document.status());

        let title = if document.title().trim().is_empty() {
            UNTITLED.to_string()
        } else {
            document.title().to_string()
        };

        let metadata = vec![
            MetadataItem {
                label: "Type",
                value: document.doc_type().label().to_string(),
            },
            MetadataItem {
                label: "Class",
                value: or_missing(document.class_grade()),
            },
            MetadataItem {
                label: "Semester",
                value: or_missing(document.semester()),
            },
            MetadataItem {
                label: "Category",
                value: or_missing(document.curriculum_category()),
            },
            MetadataItem {
                label: "Date",
                value: date.long_date(),
            },
        ];

        let sections = ContentSection::ALL
            .into_iter()
            .map(|section| {
                let text = document.content().get(section);
                PreviewSection {
                    section,
                    heading: section.heading(),
                    body: (!text.is_empty()).then(|| text.to_string()),
                    placeholder: section.empty_placeholder(),
                }
            })
            .collect();

        Self {
            document_id: document.id().clone(),
            letterhead: Letterhead::STANDARD,
            stamp,
            stamp_label: stamp.label(),
            reference: format!("Ref: {}", document.id().reference_code()),
            title,
            metadata,
            sections,
            signatures: SIGNATURES.to_vec(),
        }
    }

    pub fn section(&self, section: ContentSection) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Renders the layout as Markdown for export.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(md, "# {}\n", self.letterhead.institution);
        let _ = writeln!(md, "{}\n", self.letterhead.subtitle);
        let _ = writeln!(md, "**{}** · {}\n", self.stamp_label, self.reference);
        let _ = writeln!(md, "---\n");
        let _ = writeln!(md, "## {}\n", self.title);

        let meta: Vec<String> = self
            .metadata
            .iter()
            .map(|m| format!("**{}:** {}", m.label, m.value))
            .collect();
        let _ = writeln!(md, "{}\n", meta.join(" | "));

        for section in &self.sections {
            let _ = writeln!(md, "### {}\n", section.heading);
            match &section.body {
                Some(body) => {
                    let _ = writeln!(md, "{}\n", body.trim_end());
                }
                None => {
                    let _ = writeln!(md, "*{}*\n", section.placeholder);
                }
            }
        }

        let _ = writeln!(
            md,
            "| {} | {} |\n|:---:|:---:|\n| {} | {} |",
            self.signatures[0].role,
            self.signatures[1].role,
            self.signatures[0].caption,
            self.signatures[1].caption,
        );

        md
    }
}

/// One option of the preview status control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub status: DocumentStatus,
    pub label: &'static str,
    pub is_current: bool,
}

/// One option per status, with the current one flagged.
pub fn status_options(current: DocumentStatus) -> Vec<StatusOption> {
    DocumentStatus::ALL
        .into_iter()
        .map(|status| StatusOption {
            status,
            label: status.label(),
            is_current: status == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::TopLevelField;
    use crate::domain::foundation::DocumentType;

    fn date() -> Timestamp {
        Timestamp::parse_rfc3339("2024-03-05T08:00:00Z").unwrap()
    }

    fn draft() -> AcademicDocument {
        AcademicDocument::blank(
            DocumentId::new("doc_4f0c9a21ffff").unwrap(),
            DocumentType::LessonPlan,
        )
    }

    #[test]
    fn untitled_draft_uses_fallbacks() {
        let layout = PreviewLayout::from_document(&draft(), &date());
        assert_eq!(layout.title, "Untitled Document");
        assert_eq!(layout.stamp, Stamp::DraftCopy);
        assert_eq!(layout.stamp_label, "DRAFT COPY");
        assert_eq!(layout.reference, "Ref: DOC_4F0C");
        assert_eq!(layout.metadata[1].value, "-");
        assert_eq!(layout.metadata[4].value, "5 March 2024");
    }

    #[test]
    fn final_documents_are_stamped_official() {
        let doc = draft().with_status(DocumentStatus::Final);
        assert_eq!(PreviewLayout::from_document(&doc, &date()).stamp_label, "OFFICIAL");

        let ready = draft().with_status(DocumentStatus::ReadyToPrint);
        assert_eq!(PreviewLayout::from_document(&ready, &date()).stamp, Stamp::DraftCopy);
    }

    #[test]
    fn sections_render_in_fixed_order_with_placeholders() {
        let mut doc = draft();
        doc.set_section(ContentSection::Activities, "Group work (20m)");
        let layout = PreviewLayout::from_document(&doc, &date());

        let headings: Vec<&str> = layout.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "1. Learning Outcomes",
                "2. Learning Objectives",
                "3. Activity Steps",
                "4. Assessment Instruments"
            ]
        );
        assert_eq!(layout.sections[0].display_text(), "No outcomes yet.");
        assert_eq!(layout.sections[2].display_text(), "Group work (20m)");
    }

    #[test]
    fn markdown_contains_letterhead_metadata_and_signatures() {
        let mut doc = draft();
        doc.set_top_level(TopLevelField::Title, "Fractions");
        doc.set_top_level(TopLevelField::ClassGrade, "Grade 7");
        let md = PreviewLayout::from_document(&doc, &date()).to_markdown();

        assert!(md.contains("# School Curriculum Standard"));
        assert!(md.contains("## Fractions"));
        assert!(md.contains("**Class:** Grade 7"));
        assert!(md.contains("**Type:** Lesson Plan (RPP)"));
        assert!(md.contains("*No assessments yet.*"));
        assert!(md.contains("Acknowledged by, Principal"));
        assert!(md.contains("(Name & Signature)"));
    }

    #[test]
    fn status_options_flag_current() {
        let options = status_options(DocumentStatus::Final);
        assert_eq!(options.len(), 3);
        let current: Vec<_> = options.iter().filter(|o| o.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].status, DocumentStatus::Final);
        assert_eq!(options[2].label, "Ready to Print");
    }
}
