//! Per-participant set of scored and banded dimensions.

use serde::Serialize;

use crate::domain::foundation::{Band, Dimension, DimensionScore, ValidationError};

/// One dimension's score and band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionResult {
    pub dimension: Dimension,
    pub score: DimensionScore,
    pub band: Band,
}

impl DimensionResult {
    pub fn new(dimension: Dimension, score: DimensionScore, band: Band) -> Self {
        Self {
            dimension,
            score,
            band,
        }
    }
}

/// Exactly one result for each of the five dimensions.
///
/// Results keep the order they were supplied in; consumers that need a
/// ranking sort explicitly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionProfile {
    results: Vec<DimensionResult>,
}

impl DimensionProfile {
    /// Builds a profile, rejecting missing or duplicate dimensions.
    pub fn try_new(results: Vec<DimensionResult>) -> Result<Self, ValidationError> {
        for dim in Dimension::ALL {
            let count = results.iter().filter(|r| r.dimension == dim).count();
            if count != 1 {
                return Err(ValidationError::invalid_format(
                    "dimension_profile",
                    format!("{} present {} times", dim, count),
                ));
            }
        }
        Ok(Self { results })
    }

    /// Result for a dimension.
    pub fn get(&self, dimension: Dimension) -> Option<&DimensionResult> {
        self.results.iter().find(|r| r.dimension == dimension)
    }

    /// Results in supplied order.
    pub fn iter(&self) -> impl Iterator<Item = &DimensionResult> {
        self.results.iter()
    }

    /// Results in report order (DT, TR, CO, CA, EP).
    pub fn in_report_order(&self) -> impl Iterator<Item = &DimensionResult> {
        Dimension::ALL.into_iter().filter_map(|d| self.get(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dimension: Dimension, score: f64, band: Band) -> DimensionResult {
        DimensionResult::new(dimension, DimensionScore::new(score), band)
    }

    fn full() -> Vec<DimensionResult> {
        vec![
            result(Dimension::EmpathyPerspective, 3.6, Band::High),
            result(Dimension::DirectnessTransparency, 4.8, Band::VeryHigh),
            result(Dimension::TaskRelational, 2.0, Band::Developing),
            result(Dimension::ConflictOrientation, 3.0, Band::Moderate),
            result(Dimension::CulturalAdaptability, 1.2, Band::Low),
        ]
    }

    #[test]
    fn accepts_one_result_per_dimension() {
        let profile = DimensionProfile::try_new(full()).unwrap();
        assert_eq!(
            profile.get(Dimension::CulturalAdaptability).unwrap().band,
            Band::Low
        );
        let report: Vec<Dimension> = profile.in_report_order().map(|r| r.dimension).collect();
        assert_eq!(report, Dimension::ALL.to_vec());
        assert_eq!(
            profile.iter().next().unwrap().dimension,
            Dimension::EmpathyPerspective
        );
    }

    #[test]
    fn rejects_missing_dimension() {
        let mut results = full();
        results.pop();
        assert!(DimensionProfile::try_new(results).is_err());
    }

    #[test]
    fn rejects_duplicate_dimension() {
        let mut results = full();
        results[4] = result(Dimension::EmpathyPerspective, 1.0, Band::Low);
        assert!(DimensionProfile::try_new(results).is_err());
    }
}
