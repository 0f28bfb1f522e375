//! DocumentStatus enum for tracking where a document is in its print workflow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Workflow status of an academic document.
///
/// Any status may be set from any other; the preview offers every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Final,
    ReadyToPrint,
}

impl DocumentStatus {
    /// All statuses in display order.
    pub const ALL: [DocumentStatus; 3] = [
        DocumentStatus::Draft,
        DocumentStatus::Final,
        DocumentStatus::ReadyToPrint,
    ];

    /// Returns true for statuses counted as completed on the dashboard.
    pub fn is_completed(&self) -> bool {
        matches!(self, DocumentStatus::Final | DocumentStatus::ReadyToPrint)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Final => "Final",
            DocumentStatus::ReadyToPrint => "Ready to Print",
        }
    }

    /// Wire key (matches the serde representation).
    pub fn key(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Final => "final",
            DocumentStatus::ReadyToPrint => "ready_to_print",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DocumentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown status '{}'", s))
            })
    }
}
