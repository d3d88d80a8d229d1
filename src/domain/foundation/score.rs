//! DimensionScore value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ScalePoint, ValidationError};

/// Mean of a dimension's items on the native scale.
///
/// Always finite and within `[ScalePoint::MIN, ScalePoint::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DimensionScore(f64);

impl DimensionScore {
    /// Lowest representable score.
    pub const MIN: f64 = ScalePoint::MIN as u8 as f64;

    /// Highest representable score.
    pub const MAX: f64 = ScalePoint::MAX as u8 as f64;

    /// Creates a score, clamping to the scale bounds. NaN becomes the minimum.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a score, returning error if it is not finite or leaves the scale.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < Self::MIN || value > Self::MAX {
            return Err(ValidationError::out_of_range(
                "dimension_score",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DimensionScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<DimensionScore> for f64 {
    fn from(score: DimensionScore) -> Self {
        score.0
    }
}

impl fmt::Display for DimensionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scale_bounds() {
        assert_eq!(DimensionScore::try_new(1.0).unwrap().value(), 1.0);
        assert_eq!(DimensionScore::try_new(5.0).unwrap().value(), 5.0);
        assert_eq!(DimensionScore::try_new(3.4).unwrap().value(), 3.4);
    }

    #[test]
    fn rejects_values_off_scale() {
        assert!(DimensionScore::try_new(0.99).is_err());
        assert!(DimensionScore::try_new(5.01).is_err());
        assert!(DimensionScore::try_new(f64::NAN).is_err());
        assert!(DimensionScore::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn new_clamps_to_scale() {
        assert_eq!(DimensionScore::new(0.2).value(), 1.0);
        assert_eq!(DimensionScore::new(7.0).value(), 5.0);
        assert_eq!(DimensionScore::new(f64::NAN).value(), 1.0);
        assert_eq!(DimensionScore::new(2.6).value(), 2.6);
    }

    #[test]
    fn deserialization_validates() {
        let ok: DimensionScore = serde_json::from_str("4.2").unwrap();
        assert_eq!(ok.value(), 4.2);
        assert!(serde_json::from_str::<DimensionScore>("9.0").is_err());
    }
}
