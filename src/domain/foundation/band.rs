//! Interpretation bands for dimension scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal interpretation tier, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Developing,
    Moderate,
    High,
    VeryHigh,
}

impl Band {
    /// Every band, highest first (classification order).
    pub const HIGHEST_FIRST: [Band; 5] = [
        Band::VeryHigh,
        Band::High,
        Band::Moderate,
        Band::Developing,
        Band::Low,
    ];

    /// Returns the display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Band::Low => "Low / Limited",
            Band::Developing => "Developing",
            Band::Moderate => "Moderate / Balanced",
            Band::High => "High",
            Band::VeryHigh => "Very High",
        }
    }

    /// Bands that qualify a dimension as a strength.
    pub fn is_strength(&self) -> bool {
        matches!(self, Band::High | Band::VeryHigh)
    }

    /// Bands that qualify a dimension as a development area.
    pub fn is_development(&self) -> bool {
        matches!(self, Band::Developing | Band::Low)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
