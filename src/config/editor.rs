//! Editor configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::AutoSaveSettings;

/// Auto-save timing.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// Quiet period after the last edit before the draft is pushed
    #[serde(default = "default_debounce")]
    pub autosave_debounce_ms: u64,

    /// How long the "saving" indicator stays on after a push
    #[serde(default = "default_indicator")]
    pub autosave_indicator_ms: u64,
}

impl EditorConfig {
    pub fn autosave(&self) -> AutoSaveSettings {
        AutoSaveSettings {
            debounce: Duration::from_millis(self.autosave_debounce_ms),
            indicator: Duration::from_millis(self.autosave_indicator_ms),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.autosave_debounce_ms == 0 {
            return Err(ValidationError::InvalidAutosaveDebounce);
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: default_debounce(),
            autosave_indicator_ms: default_indicator(),
        }
    }
}

fn default_debounce() -> u64 {
    1000
}

fn default_indicator() -> u64 {
    800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_autosave_defaults() {
        let settings = EditorConfig::default().autosave();
        assert_eq!(settings.debounce, Duration::from_millis(1000));
        assert_eq!(settings.indicator, Duration::from_millis(800));
    }

    #[test]
    fn test_zero_debounce_is_rejected() {
        let config = EditorConfig {
            autosave_debounce_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAutosaveDebounce));
    }
}
