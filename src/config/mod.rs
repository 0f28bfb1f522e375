//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EDUDOC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use edudoc::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.bind_address().unwrap());
//! ```

mod ai;
mod editor;
mod error;
mod server;

pub use ai::AiConfig;
pub use editor::EditorConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration (without AI assistance).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener configuration (bind address, timeout, CORS, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Auto-save timing
    #[serde(default)]
    pub editor: EditorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EDUDOC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EDUDOC__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `EDUDOC__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EDUDOC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.editor.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "EDUDOC__SERVER__PORT",
        "EDUDOC__SERVER__CORS_ORIGINS",
        "EDUDOC__AI__GEMINI_API_KEY",
        "EDUDOC__AI__MODEL",
        "EDUDOC__EDITOR__AUTOSAVE_DEBOUNCE_MS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.editor.autosave_debounce_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        env::set_var("EDUDOC__SERVER__PORT", "3000");
        env::set_var("EDUDOC__AI__GEMINI_API_KEY", "test-key");
        env::set_var("EDUDOC__AI__MODEL", "gemini-1.5-pro");
        env::set_var("EDUDOC__EDITOR__AUTOSAVE_DEBOUNCE_MS", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.api_key(), Some("test-key"));
        assert_eq!(config.ai.model, "gemini-1.5-pro");
        assert_eq!(config.editor.autosave_debounce_ms, 250);
    }

    #[test]
    fn test_load_cors_origins_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        env::set_var("EDUDOC__SERVER__CORS_ORIGINS", "http://localhost:5173");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.allowed_origins(), vec!["http://localhost:5173"]);
        assert_eq!(config.server.request_timeout_secs, 30);
    }

    #[test]
    fn test_validate_reports_first_failing_section() {
        let mut config = AppConfig::default();
        config.editor.autosave_debounce_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidAutosaveDebounce)
        );
    }
}
