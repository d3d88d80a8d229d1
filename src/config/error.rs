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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Input and output paths must differ")]
    OutputOverwritesInput,

    #[error("Output path must end in .json")]
    InvalidOutputExtension,

    #[error("Invalid band thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Text bank file not found: {0}")]
    TextBankNotFound(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
