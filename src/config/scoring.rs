//! Scoring configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;
use crate::domain::scoring::BandThresholds;

/// Band thresholds and wording overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Lower bounds of the upper four bands
    #[serde(default)]
    pub thresholds: BandThresholds,

    /// YAML text bank replacing the built-in wording
    pub text_bank_path: Option<String>,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds
            .validate()
            .map_err(|e| ValidationError::InvalidThresholds(e.to_string()))?;

        if let Some(path) = &self.text_bank_path {
            if !Path::new(path).is_file() {
                return Err(ValidationError::TextBankNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScoringConfig::default();
        assert_eq!(config.thresholds.very_high, 4.5);
        assert!(config.text_bank_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_non_descending_thresholds() {
        let config = ScoringConfig {
            thresholds: BandThresholds {
                moderate: 3.6,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_validation_missing_text_bank() {
        let config = ScoringConfig {
            text_bank_path: Some("/nonexistent/bank.yaml".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TextBankNotFound(_))
        ));
    }

    #[test]
    fn test_existing_text_bank_passes() {
        let file = NamedTempFile::new().unwrap();
        let config = ScoringConfig {
            text_bank_path: Some(file.path().display().to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
