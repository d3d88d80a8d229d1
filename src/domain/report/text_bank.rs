//! Text bank - all wording that ends up in a report.
//!
//! The built-in bank is embedded at compile time and parsed once per
//! process. A replacement can be loaded from YAML with [`TextBank::from_yaml`];
//! both paths go through the same completeness check.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{Band, Dimension};

/// Glyphs and words that would turn a level or priority icon into a status mark.
pub const STATUS_MARKERS: [&str; 8] = ["✓", "✔", "✗", "✘", "☑", "☒", "checkmark", "status icon"];

static BUILTIN: Lazy<Result<Arc<TextBank>, TextBankError>> = Lazy::new(|| {
    TextBank::from_yaml(include_str!("default_text_bank.yaml")).map(Arc::new)
});

/// Errors loading or validating a text bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextBankError {
    #[error("text bank is not valid YAML: {0}")]
    Parse(String),

    #[error("text bank entry '{0}' is empty")]
    EmptyEntry(String),

    #[error("text bank entry '{entry}' contains status marker '{marker}'")]
    StatusMarker { entry: String, marker: String },
}

/// One value per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerDimension<T> {
    #[serde(rename = "DT")]
    pub dt: T,
    #[serde(rename = "TR")]
    pub tr: T,
    #[serde(rename = "CO")]
    pub co: T,
    #[serde(rename = "CA")]
    pub ca: T,
    #[serde(rename = "EP")]
    pub ep: T,
}

impl<T> PerDimension<T> {
    pub fn get(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::DirectnessTransparency => &self.dt,
            Dimension::TaskRelational => &self.tr,
            Dimension::ConflictOrientation => &self.co,
            Dimension::CulturalAdaptability => &self.ca,
            Dimension::EmpathyPerspective => &self.ep,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrengthTexts {
    pub high: String,
    pub very_high: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevelopmentTexts {
    pub developing: String,
    pub low: String,
}

/// Score interpretation for every band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterpretationTexts {
    pub low: String,
    pub developing: String,
    pub moderate: String,
    pub high: String,
    pub very_high: String,
}

impl InterpretationTexts {
    pub fn get(&self, band: Band) -> &str {
        match band {
            Band::Low => &self.low,
            Band::Developing => &self.developing,
            Band::Moderate => &self.moderate,
            Band::High => &self.high,
            Band::VeryHigh => &self.very_high,
        }
    }
}

/// Wording for padded slots in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderText {
    pub none_identified: String,
    pub no_additional: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderTexts {
    pub strengths: PlaceholderText,
    pub development: PlaceholderText,
}

/// Building blocks for the three summary sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryTexts {
    pub strengths_lead: String,
    pub strengths_fallback: String,
    pub development_lead: String,
    pub development_fallback: String,
    pub guidance_with_development: String,
    pub guidance_without_development: String,
}

/// Immutable wording tables used by the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextBank {
    pub strengths: PerDimension<StrengthTexts>,
    pub development: PerDimension<DevelopmentTexts>,
    pub priorities: PerDimension<String>,
    pub interpretations: PerDimension<InterpretationTexts>,
    pub placeholders: PlaceholderTexts,
    pub summary: SummaryTexts,
}

impl TextBank {
    /// The survey's published wording, shared across the process.
    pub fn builtin() -> Result<Arc<TextBank>, TextBankError> {
        (*BUILTIN).clone()
    }

    /// Parses and validates a bank.
    pub fn from_yaml(source: &str) -> Result<Self, TextBankError> {
        let bank: TextBank =
            serde_yaml::from_str(source).map_err(|e| TextBankError::Parse(e.to_string()))?;
        bank.validate()?;
        Ok(bank)
    }

    /// Rejects empty entries and status markers.
    pub fn validate(&self) -> Result<(), TextBankError> {
        for (entry, text) in self.entries() {
            if text.trim().is_empty() {
                return Err(TextBankError::EmptyEntry(entry));
            }
            let lowered = text.to_lowercase();
            if let Some(marker) = STATUS_MARKERS.iter().find(|m| lowered.contains(*m)) {
                return Err(TextBankError::StatusMarker {
                    entry,
                    marker: marker.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Strength wording; `None` for bands that do not qualify.
    pub fn strength_text(&self, dimension: Dimension, band: Band) -> Option<&str> {
        let texts = self.strengths.get(dimension);
        match band {
            Band::VeryHigh => Some(texts.very_high.as_str()),
            Band::High => Some(texts.high.as_str()),
            _ => None,
        }
    }

    /// Development wording; `None` for bands that do not qualify.
    pub fn development_text(&self, dimension: Dimension, band: Band) -> Option<&str> {
        let texts = self.development.get(dimension);
        match band {
            Band::Developing => Some(texts.developing.as_str()),
            Band::Low => Some(texts.low.as_str()),
            _ => None,
        }
    }

    pub fn priority_text(&self, dimension: Dimension) -> &str {
        self.priorities.get(dimension)
    }

    pub fn interpretation(&self, dimension: Dimension, band: Band) -> &str {
        self.interpretations.get(dimension).get(band)
    }

    /// Every text with a dotted path naming it.
    fn entries(&self) -> Vec<(String, &str)> {
        let mut entries: Vec<(String, &str)> = Vec::new();
        for (dim, texts) in self.strengths.iter() {
            entries.push((format!("strengths.{}.high", dim), texts.high.as_str()));
            entries.push((format!("strengths.{}.very_high", dim), texts.very_high.as_str()));
        }
        for (dim, texts) in self.development.iter() {
            entries.push((
                format!("development.{}.developing", dim),
                texts.developing.as_str(),
            ));
            entries.push((format!("development.{}.low", dim), texts.low.as_str()));
        }
        for (dim, text) in self.priorities.iter() {
            entries.push((format!("priorities.{}", dim), text.as_str()));
        }
        for (dim, texts) in self.interpretations.iter() {
            for band in Band::HIGHEST_FIRST {
                entries.push((format!("interpretations.{}.{:?}", dim, band), texts.get(band)));
            }
        }
        for (name, placeholder) in [
            ("strengths", &self.placeholders.strengths),
            ("development", &self.placeholders.development),
        ] {
            entries.push((
                format!("placeholders.{}.none_identified", name),
                placeholder.none_identified.as_str(),
            ));
            entries.push((
                format!("placeholders.{}.no_additional", name),
                placeholder.no_additional.as_str(),
            ));
            entries.push((format!("placeholders.{}.body", name), placeholder.body.as_str()));
        }
        let summary = &self.summary;
        entries.push(("summary.strengths_lead".into(), summary.strengths_lead.as_str()));
        entries.push(("summary.strengths_fallback".into(), summary.strengths_fallback.as_str()));
        entries.push(("summary.development_lead".into(), summary.development_lead.as_str()));
        entries.push((
            "summary.development_fallback".into(),
            summary.development_fallback.as_str(),
        ));
        entries.push((
            "summary.guidance_with_development".into(),
            summary.guidance_with_development.as_str(),
        ));
        entries.push((
            "summary.guidance_without_development".into(),
            summary.guidance_without_development.as_str(),
        ));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_yaml() -> &'static str {
        include_str!("default_text_bank.yaml")
    }

    #[test]
    fn builtin_bank_loads_and_is_shared() {
        let a = TextBank::builtin().unwrap();
        let b = TextBank::builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn builtin_bank_has_published_wording() {
        let bank = TextBank::builtin().unwrap();
        assert!(bank
            .priority_text(Dimension::ConflictOrientation)
            .starts_with("Use the S.C.O.P.E. Feedforward Model"));
        assert_eq!(
            bank.placeholders.strengths.none_identified,
            "No key strengths were identified."
        );
        assert!(bank
            .interpretation(Dimension::TaskRelational, Band::Moderate)
            .starts_with("Handles tasks and relationships fairly well"));
    }

    #[test]
    fn placeholder_bodies_fill_all_three_lines() {
        let bank = TextBank::builtin().unwrap();
        for text in [&bank.placeholders.strengths, &bank.placeholders.development] {
            let body = crate::domain::report::three_line_body(&text.body);
            let lines: Vec<&str> = body.split('\n').collect();
            assert_eq!(lines.len(), 3);
            assert!(lines.iter().all(|line| !line.is_empty()), "{:?}", body);
            assert!(!text.body.contains("interpret with caution"));
        }
    }

    #[test]
    fn band_specific_lookups() {
        let bank = TextBank::builtin().unwrap();
        let dim = Dimension::EmpathyPerspective;
        assert!(bank.strength_text(dim, Band::VeryHigh).is_some());
        assert!(bank.strength_text(dim, Band::Moderate).is_none());
        assert!(bank.development_text(dim, Band::Low).is_some());
        assert!(bank.development_text(dim, Band::High).is_none());
        assert_ne!(
            bank.strength_text(dim, Band::High),
            bank.strength_text(dim, Band::VeryHigh)
        );
    }

    #[test]
    fn builtin_bank_has_no_status_markers() {
        let bank = TextBank::builtin().unwrap();
        for (entry, text) in bank.entries() {
            let lowered = text.to_lowercase();
            let has_tick_word = lowered
                .split(|c: char| !c.is_alphabetic())
                .any(|word| word == "tick" || word == "ticks");
            assert!(!has_tick_word, "{} mentions ticks", entry);
            for marker in STATUS_MARKERS {
                assert!(!lowered.contains(marker), "{} contains {}", entry, marker);
            }
        }
    }

    #[test]
    fn empty_entry_is_rejected() {
        let yaml = builtin_yaml().replace(
            "  strengths_lead: \"Your strongest areas are\"",
            "  strengths_lead: \"  \"",
        );
        assert_eq!(
            TextBank::from_yaml(&yaml),
            Err(TextBankError::EmptyEntry("summary.strengths_lead".into()))
        );
    }

    #[test]
    fn missing_dimension_is_rejected() {
        let mut bank: serde_yaml::Value = serde_yaml::from_str(builtin_yaml()).unwrap();
        bank["priorities"]
            .as_mapping_mut()
            .unwrap()
            .remove(serde_yaml::Value::from("EP"));
        let yaml = serde_yaml::to_string(&bank).unwrap();
        assert!(matches!(TextBank::from_yaml(&yaml), Err(TextBankError::Parse(_))));
    }

    #[test]
    fn status_marker_is_rejected() {
        let yaml = builtin_yaml().replace(
            "  strengths_lead: \"Your strongest areas are\"",
            "  strengths_lead: \"✓ Your strongest areas are\"",
        );
        assert!(matches!(
            TextBank::from_yaml(&yaml),
            Err(TextBankError::StatusMarker { .. })
        ));
    }

    #[test]
    fn override_bank_replaces_wording() {
        let mut bank: serde_yaml::Value = serde_yaml::from_str(builtin_yaml()).unwrap();
        bank["priorities"]["DT"] = serde_yaml::Value::from("Say what you mean. Mean what you say.");
        let yaml = serde_yaml::to_string(&bank).unwrap();
        let parsed = TextBank::from_yaml(&yaml).unwrap();
        assert_eq!(
            parsed.priority_text(Dimension::DirectnessTransparency),
            "Say what you mean. Mean what you say."
        );
    }
}
