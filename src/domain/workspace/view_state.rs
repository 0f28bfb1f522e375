//! The active top-level view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Exactly one view is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Dashboard,
    Editor,
    Preview,
    Templates,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::Dashboard,
        ViewState::Editor,
        ViewState::Preview,
        ViewState::Templates,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "dashboard",
            ViewState::Editor => "editor",
            ViewState::Preview => "preview",
            ViewState::Templates => "templates",
        }
    }

    /// Views that operate on the selected document.
    pub fn needs_selection(&self) -> bool {
        matches!(self, ViewState::Editor | ViewState::Preview)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ViewState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewState::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| ValidationError::invalid_format("view", format!("unknown value '{}'", s)))
    }
}
