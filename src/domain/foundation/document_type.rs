//! DocumentType enum for the kinds of academic documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Kind of academic document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    TeachingModule,
    ActivityReport,
    ReflectionSheet,
    LessonPlan,
}

impl DocumentType {
    /// All document types in display order.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::TeachingModule,
        DocumentType::ActivityReport,
        DocumentType::ReflectionSheet,
        DocumentType::LessonPlan,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::TeachingModule => "Teaching Module",
            DocumentType::ActivityReport => "Activity Report",
            DocumentType::ReflectionSheet => "Reflection Sheet",
            DocumentType::LessonPlan => "Lesson Plan (RPP)",
        }
    }

    /// Wire key (matches the serde representation).
    pub fn key(&self) -> &'static str {
        match self {
            DocumentType::TeachingModule => "teaching_module",
            DocumentType::ActivityReport => "activity_report",
            DocumentType::ReflectionSheet => "reflection_sheet",
            DocumentType::LessonPlan => "lesson_plan",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|doc_type| doc_type.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("type", format!("unknown document type '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(DocumentType::TeachingModule.label(), "Teaching Module");
        assert_eq!(DocumentType::LessonPlan.to_string(), "Lesson Plan (RPP)");
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for doc_type in DocumentType::ALL {
            assert_eq!(doc_type.key().parse::<DocumentType>().unwrap(), doc_type);
        }
    }

    #[test]
    fn serde_matches_key() {
        let json = serde_json::to_string(&DocumentType::ActivityReport).unwrap();
        assert_eq!(json, "\"activity_report\"");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("syllabus".parse::<DocumentType>().is_err());
    }
}
