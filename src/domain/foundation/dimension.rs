//! Dimension enum and the tie-break ordering over dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the five communication-style axes measured by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "DT")]
    DirectnessTransparency,
    #[serde(rename = "TR")]
    TaskRelational,
    #[serde(rename = "CO")]
    ConflictOrientation,
    #[serde(rename = "CA")]
    CulturalAdaptability,
    #[serde(rename = "EP")]
    EmpathyPerspective,
}

impl Dimension {
    /// All dimensions in report order.
    pub const ALL: [Dimension; 5] = [
        Dimension::DirectnessTransparency,
        Dimension::TaskRelational,
        Dimension::ConflictOrientation,
        Dimension::CulturalAdaptability,
        Dimension::EmpathyPerspective,
    ];

    /// Returns the two-letter code used in column names and icon keys.
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::DirectnessTransparency => "DT",
            Dimension::TaskRelational => "TR",
            Dimension::ConflictOrientation => "CO",
            Dimension::CulturalAdaptability => "CA",
            Dimension::EmpathyPerspective => "EP",
        }
    }

    /// Position in [`Dimension::ALL`], for table lookups.
    pub fn index(&self) -> usize {
        match self {
            Dimension::DirectnessTransparency => 0,
            Dimension::TaskRelational => 1,
            Dimension::ConflictOrientation => 2,
            Dimension::CulturalAdaptability => 3,
            Dimension::EmpathyPerspective => 4,
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::DirectnessTransparency => "Directness & Transparency",
            Dimension::TaskRelational => "Task vs Relational Accountability",
            Dimension::ConflictOrientation => "Conflict Orientation",
            Dimension::CulturalAdaptability => "Cultural Adaptability",
            Dimension::EmpathyPerspective => "Empathy & Perspective-Taking",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("dimension", format!("unknown code '{}'", s))
            })
    }
}

/// Fixed tie-break sequence over the five dimensions.
///
/// Whenever two dimensions carry equal scores, the one that appears earlier
/// here sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionOrder([Dimension; 5]);

impl DimensionOrder {
    /// DT, TR, CO, CA, EP.
    pub const STANDARD: Self = Self(Dimension::ALL);

    /// Creates an order, rejecting sequences that are not a permutation of
    /// all five dimensions.
    pub fn try_new(order: [Dimension; 5]) -> Result<Self, ValidationError> {
        for dim in Dimension::ALL {
            let occurrences = order.iter().filter(|d| **d == dim).count();
            if occurrences != 1 {
                return Err(ValidationError::invalid_format(
                    "dimension_order",
                    format!("{} appears {} times", dim, occurrences),
                ));
            }
        }
        Ok(Self(order))
    }

    /// Zero-based position of a dimension in this order.
    pub fn position(&self, dimension: Dimension) -> usize {
        self.0
            .iter()
            .position(|d| *d == dimension)
            .unwrap_or(self.0.len())
    }

    /// Dimensions in tie-break order.
    pub fn as_slice(&self) -> &[Dimension; 5] {
        &self.0
    }
}

impl Default for DimensionOrder {
    fn default() -> Self {
        Self::STANDARD
    }
}
