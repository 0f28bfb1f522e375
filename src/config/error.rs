//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid AI request timeout")]
    InvalidAiTimeout,

    #[error("AI base URL must start with http:// or https://")]
    InvalidAiBaseUrl,

    #[error("AI model name cannot be empty")]
    MissingAiModel,

    #[error("Auto-save debounce must be greater than zero")]
    InvalidAutosaveDebounce,
}
