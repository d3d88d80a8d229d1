//! ScalePoint value object for the five-point Likert scale (1 to 5).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Agreement level on the survey's discrete five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ScalePoint {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl ScalePoint {
    /// Lower bound of the scale (L).
    pub const MIN: ScalePoint = ScalePoint::StronglyDisagree;

    /// Upper bound of the scale (U).
    pub const MAX: ScalePoint = ScalePoint::StronglyAgree;

    /// Every point, lowest first.
    pub const ALL: [ScalePoint; 5] = [
        ScalePoint::StronglyDisagree,
        ScalePoint::Disagree,
        ScalePoint::Neutral,
        ScalePoint::Agree,
        ScalePoint::StronglyAgree,
    ];

    /// Creates a ScalePoint from an integer, returning error if out of range.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(ScalePoint::StronglyDisagree),
            2 => Ok(ScalePoint::Disagree),
            3 => Ok(ScalePoint::Neutral),
            4 => Ok(ScalePoint::Agree),
            5 => Ok(ScalePoint::StronglyAgree),
            _ => Err(ValidationError::out_of_range(
                "scale_point",
                f64::from(Self::MIN.value()),
                f64::from(Self::MAX.value()),
                value as f64,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the canonical response label.
    pub fn label(&self) -> &'static str {
        match self {
            ScalePoint::StronglyDisagree => "Strongly Disagree",
            ScalePoint::Disagree => "Disagree",
            ScalePoint::Neutral => "Neutral",
            ScalePoint::Agree => "Agree",
            ScalePoint::StronglyAgree => "Strongly Agree",
        }
    }

    /// Scale complement `U + L - v`, used for reverse-keyed items.
    pub fn complement(&self) -> ScalePoint {
        match self {
            ScalePoint::StronglyDisagree => ScalePoint::StronglyAgree,
            ScalePoint::Disagree => ScalePoint::Agree,
            ScalePoint::Neutral => ScalePoint::Neutral,
            ScalePoint::Agree => ScalePoint::Disagree,
            ScalePoint::StronglyAgree => ScalePoint::StronglyDisagree,
        }
    }
}

impl fmt::Display for ScalePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
