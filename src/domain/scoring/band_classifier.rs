//! Band Classifier - maps dimension scores onto interpretation bands.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Band, DimensionScore, ValidationError};

/// Lower bounds (inclusive) of the four upper bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub very_high: f64,
    pub high: f64,
    pub moderate: f64,
    pub developing: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            very_high: 4.5,
            high: 3.5,
            moderate: 2.5,
            developing: 1.5,
        }
    }
}

impl BandThresholds {
    /// Checks that thresholds are finite, strictly descending, and inside
    /// `(MIN, MAX]` so that every band is reachable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = [
            ("very_high", self.very_high),
            ("high", self.high),
            ("moderate", self.moderate),
            ("developing", self.developing),
        ];

        for (field, value) in ordered {
            if !value.is_finite() || value <= DimensionScore::MIN || value > DimensionScore::MAX {
                return Err(ValidationError::out_of_range(
                    field,
                    DimensionScore::MIN,
                    DimensionScore::MAX,
                    value,
                ));
            }
        }

        for pair in ordered.windows(2) {
            let (upper_name, upper) = pair[0];
            let (lower_name, lower) = pair[1];
            if lower >= upper {
                return Err(ValidationError::invalid_format(
                    "band_thresholds",
                    format!(
                        "{} ({}) must be below {} ({})",
                        lower_name, lower, upper_name, upper
                    ),
                ));
            }
        }

        Ok(())
    }

    fn lower_bound(&self, band: Band) -> Option<f64> {
        match band {
            Band::VeryHigh => Some(self.very_high),
            Band::High => Some(self.high),
            Band::Moderate => Some(self.moderate),
            Band::Developing => Some(self.developing),
            Band::Low => None,
        }
    }
}

/// Total function from score to band.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandClassifier {
    thresholds: BandThresholds,
}

impl BandClassifier {
    /// Creates a classifier from validated thresholds.
    pub fn new(thresholds: BandThresholds) -> Result<Self, ValidationError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &BandThresholds {
        &self.thresholds
    }

    /// Classifies a score, checking bands highest first. A score equal to a
    /// threshold belongs to the higher band.
    pub fn classify(&self, score: DimensionScore) -> Band {
        Band::HIGHEST_FIRST
            .into_iter()
            .find(|band| match self.thresholds.lower_bound(*band) {
                Some(bound) => score.value() >= bound,
                None => true,
            })
            .unwrap_or(Band::Low)
    }
}
