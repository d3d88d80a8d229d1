//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CCIP` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ccip_profile::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading responses from {}", config.batch.input_path);
//! ```

mod batch;
mod error;
mod logging;
mod scoring;

pub use batch::BatchConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Input, output, and icon locations
    pub batch: BatchConfig,

    /// Band thresholds and text bank override
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CCIP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CCIP__BATCH__INPUT_PATH=responses.jsonl` -> `batch.input_path`
    /// - `CCIP__SCORING__THRESHOLDS__HIGH=3.4` -> `scoring.thresholds.high`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CCIP")
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
        self.batch.validate()?;
        self.scoring.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
