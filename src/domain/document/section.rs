//! The four free-text content sections every academic document carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four content sections, in their fixed document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSection {
    Outcomes,
    Objectives,
    Activities,
    Assessments,
}

impl ContentSection {
    /// All sections in document order.
    pub const ALL: [ContentSection; 4] = [
        ContentSection::Outcomes,
        ContentSection::Objectives,
        ContentSection::Activities,
        ContentSection::Assessments,
    ];

    /// Field key used on the wire and in field-name lookups.
    pub fn key(&self) -> &'static str {
        match self {
            ContentSection::Outcomes => "outcomes",
            ContentSection::Objectives => "objectives",
            ContentSection::Activities => "activities",
            ContentSection::Assessments => "assessments",
        }
    }

    /// One-based position in the printed document.
    pub fn number(&self) -> usize {
        match self {
            ContentSection::Outcomes => 1,
            ContentSection::Objectives => 2,
            ContentSection::Activities => 3,
            ContentSection::Assessments => 4,
        }
    }

    /// Editor form label.
    pub fn label(&self) -> &'static str {
        match self {
            ContentSection::Outcomes => "Learning Outcomes",
            ContentSection::Objectives => "Learning Objectives",
            ContentSection::Activities => "Activity Steps",
            ContentSection::Assessments => "Assessment Instruments",
        }
    }

    /// Editor tooltip explaining what belongs in the section.
    pub fn hint(&self) -> &'static str {
        match self {
            ContentSection::Outcomes => {
                "What will students achieve by the end of this module? Use measurable verbs."
            }
            ContentSection::Objectives => {
                "Specific, granular goals for this particular lesson sequence."
            }
            ContentSection::Activities => {
                "Detailed chronological steps for the lesson. Include timestamps."
            }
            ContentSection::Assessments => {
                "How will you evaluate student understanding? (Quizzes, Observation, Projects)"
            }
        }
    }

    /// Placeholder shown in the preview when the section is empty.
    pub fn empty_placeholder(&self) -> &'static str {
        match self {
            ContentSection::Outcomes => "No outcomes yet.",
            ContentSection::Objectives => "No objectives yet.",
            ContentSection::Activities => "No activities yet.",
            ContentSection::Assessments => "No assessments yet.",
        }
    }

    /// Numbered heading used in the printed layout.
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number(), self.label())
    }
}

impl fmt::Display for ContentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ContentSection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("section", format!("unknown section '{}'", s))
            })
    }
}
