//! Batch configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where responses come from and where the report goes
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// JSON Lines file with one participant per line
    pub input_path: String,

    /// Report document to write
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Directory of pre-rendered `<KEY>.png` icon artwork; icons are skipped
    /// when unset
    pub icon_dir: Option<String>,
}

impl BatchConfig {
    /// Whether icon artwork should be rendered into the report
    pub fn renders_icons(&self) -> bool {
        self.icon_dir.is_some()
    }

    /// Validate batch configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("batch.input_path"));
        }
        if self.output_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("batch.output_path"));
        }
        if Path::new(&self.output_path).extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(ValidationError::InvalidOutputExtension);
        }
        if Path::new(&self.input_path) == Path::new(&self.output_path) {
            return Err(ValidationError::OutputOverwritesInput);
        }
        if let Some(dir) = &self.icon_dir {
            if dir.trim().is_empty() {
                return Err(ValidationError::MissingRequired("batch.icon_dir"));
            }
        }
        Ok(())
    }
}

fn default_output_path() -> String {
    "ccip_report.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BatchConfig {
        BatchConfig {
            input_path: "responses.jsonl".to_string(),
            output_path: default_output_path(),
            icon_dir: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
        assert!(!config().renders_icons());
    }

    #[test]
    fn test_validation_missing_input() {
        let config = BatchConfig {
            input_path: "  ".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("batch.input_path"))
        ));
    }

    #[test]
    fn test_validation_output_extension() {
        let config = BatchConfig {
            output_path: "report.xlsx".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidOutputExtension)
        ));
    }

    #[test]
    fn test_validation_output_overwrites_input() {
        let config = BatchConfig {
            input_path: "data.json".to_string(),
            output_path: "data.json".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutputOverwritesInput)
        ));
    }

    #[test]
    fn test_icon_dir_enables_icons() {
        let config = BatchConfig {
            icon_dir: Some("icons".to_string()),
            ..config()
        };
        assert!(config.renders_icons());
        assert!(config.validate().is_ok());
    }
}
