//! Likert Normalizer - maps raw answer cells onto the five-point scale.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::RawValue;
use crate::domain::foundation::{ScalePoint, ValidationError};

/// Why a raw answer could not be placed on the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationReason {
    /// The cell was empty.
    Missing,
    /// A number outside `[L, U]`.
    OutOfRange,
    /// A number inside the range that is not a scale point (the scale is discrete).
    NonIntegral,
    /// Text that is not one of the canonical labels.
    UnrecognizedLabel,
}

impl NormalizationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationReason::Missing => "missing",
            NormalizationReason::OutOfRange => "out_of_range",
            NormalizationReason::NonIntegral => "non_integral",
            NormalizationReason::UnrecognizedLabel => "unrecognized_label",
        }
    }
}

impl fmt::Display for NormalizationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw answer that failed normalization.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot normalize {raw}: {reason}")]
pub struct NormalizationError {
    pub reason: NormalizationReason,
    pub raw: RawValue,
}

impl NormalizationError {
    fn new(reason: NormalizationReason, raw: &RawValue) -> Self {
        Self {
            reason,
            raw: raw.clone(),
        }
    }
}

/// Maps numeric values and canonical text labels onto [`ScalePoint`]s.
///
/// Text matching is case-insensitive and ignores surrounding and repeated
/// whitespace; anything that is not exactly a canonical label fails.
#[derive(Debug, Clone)]
pub struct LikertNormalizer {
    labels: Vec<(String, ScalePoint)>,
}

impl LikertNormalizer {
    /// Normalizer with the survey's canonical labels
    /// (Strongly Disagree .. Strongly Agree).
    pub fn standard() -> Self {
        Self {
            labels: ScalePoint::ALL
                .iter()
                .map(|p| (canonicalize(p.label()), *p))
                .collect(),
        }
    }

    /// Normalizer with a substitute label table.
    ///
    /// The table must map exactly one distinct label to every scale point.
    pub fn with_labels<S: AsRef<str>>(
        labels: &[(S, ScalePoint)],
    ) -> Result<Self, ValidationError> {
        let table: Vec<(String, ScalePoint)> = labels
            .iter()
            .map(|(label, point)| (canonicalize(label.as_ref()), *point))
            .collect();

        if table.iter().any(|(label, _)| label.is_empty()) {
            return Err(ValidationError::empty_field("likert_label"));
        }
        for point in ScalePoint::ALL {
            let count = table.iter().filter(|(_, p)| *p == point).count();
            if count != 1 {
                return Err(ValidationError::invalid_format(
                    "likert_labels",
                    format!("scale point {} has {} labels", point, count),
                ));
            }
        }
        for (idx, (label, _)) in table.iter().enumerate() {
            if table[idx + 1..].iter().any(|(other, _)| other == label) {
                return Err(ValidationError::invalid_format(
                    "likert_labels",
                    format!("label '{}' is used twice", label),
                ));
            }
        }

        Ok(Self { labels: table })
    }

    /// Normalizes one raw answer.
    pub fn normalize(&self, raw: &RawValue) -> Result<ScalePoint, NormalizationError> {
        match raw {
            RawValue::Missing => Err(NormalizationError::new(NormalizationReason::Missing, raw)),
            RawValue::Number(n) => Self::normalize_number(*n, raw),
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(NormalizationError::new(NormalizationReason::Missing, raw));
                }
                if let Some(n) = trimmed.parse::<f64>().ok().filter(|n| n.is_finite()) {
                    return Self::normalize_number(n, raw);
                }
                let key = canonicalize(trimmed);
                self.labels
                    .iter()
                    .find(|(label, _)| *label == key)
                    .map(|(_, point)| *point)
                    .ok_or_else(|| {
                        NormalizationError::new(NormalizationReason::UnrecognizedLabel, raw)
                    })
            }
        }
    }

    fn normalize_number(n: f64, raw: &RawValue) -> Result<ScalePoint, NormalizationError> {
        let min = f64::from(ScalePoint::MIN.value());
        let max = f64::from(ScalePoint::MAX.value());
        if !n.is_finite() || n < min || n > max {
            return Err(NormalizationError::new(NormalizationReason::OutOfRange, raw));
        }
        if n.fract() != 0.0 {
            return Err(NormalizationError::new(NormalizationReason::NonIntegral, raw));
        }
        ScalePoint::try_from_i64(n as i64)
            .map_err(|_| NormalizationError::new(NormalizationReason::OutOfRange, raw))
    }
}

impl Default for LikertNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}

fn canonicalize(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
