//! Editable field addressing.
//!
//! Editors address fields explicitly: either a [`TopLevelField`] or a
//! [`ContentSection`]. [`FieldRef::resolve`] exists for callers that only
//! have a field name (e.g. an HTTP path segment); it checks top-level
//! attributes before content sections.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ContentSection;

/// Editable top-level text attributes of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelField {
    Title,
    ClassGrade,
    Semester,
    CurriculumCategory,
}

impl TopLevelField {
    /// All editable top-level fields.
    pub const ALL: [TopLevelField; 4] = [
        TopLevelField::Title,
        TopLevelField::ClassGrade,
        TopLevelField::Semester,
        TopLevelField::CurriculumCategory,
    ];

    /// Field key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            TopLevelField::Title => "title",
            TopLevelField::ClassGrade => "class_grade",
            TopLevelField::Semester => "semester",
            TopLevelField::CurriculumCategory => "curriculum_category",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for TopLevelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A resolved reference to an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRef {
    TopLevel(TopLevelField),
    Content(ContentSection),
}

impl FieldRef {
    /// Resolves a field name, top-level attributes first, then content sections.
    pub fn resolve(name: &str) -> Option<Self> {
        if let Some(field) = TopLevelField::from_key(name) {
            return Some(FieldRef::TopLevel(field));
        }
        name.parse::<ContentSection>().ok().map(FieldRef::Content)
    }
}
