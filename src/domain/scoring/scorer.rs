//! Dimension Scorer - mean of a dimension's items after reverse keying.

use serde::Serialize;
use thiserror::Error;

use super::item_map::{ItemMap, ITEMS_PER_DIMENSION};
use crate::domain::foundation::{Dimension, DimensionScore, ScalePoint};

/// A normalized answer tagged with its 1-based question number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizedItem {
    pub question: u8,
    pub point: ScalePoint,
}

impl NormalizedItem {
    pub fn new(question: u8, point: ScalePoint) -> Self {
        Self { question, point }
    }
}

/// A dimension that cannot be scored because some of its items are unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "dimension {dimension} has {usable} of {required} usable items (missing questions {missing_questions:?})"
)]
pub struct IncompleteDimensionError {
    pub dimension: Dimension,
    pub usable: usize,
    pub required: usize,
    pub missing_questions: Vec<u8>,
}

/// Aggregates normalized items into one score per dimension.
///
/// Every dimension must contribute all of its items; there is no averaging
/// over a partial set.
#[derive(Debug, Clone, Default)]
pub struct DimensionScorer {
    items: ItemMap,
}

impl DimensionScorer {
    pub fn new(items: ItemMap) -> Self {
        Self { items }
    }

    pub fn item_map(&self) -> &ItemMap {
        &self.items
    }

    /// Scores one dimension.
    ///
    /// `items` may contain answers for any question; only those owned by
    /// `dimension` are used. Reverse-keyed items contribute their scale
    /// complement. The sum runs in ascending question order regardless of
    /// the order of `items`, so equal inputs always give bit-identical scores.
    ///
    /// # Errors
    ///
    /// `IncompleteDimensionError` when any owned question has no item.
    pub fn score(
        &self,
        dimension: Dimension,
        items: &[NormalizedItem],
    ) -> Result<DimensionScore, IncompleteDimensionError> {
        let mut sum = 0.0_f64;
        let mut missing = Vec::new();

        for question in self.items.questions(dimension) {
            match items.iter().find(|item| item.question == *question) {
                Some(item) => {
                    let point = if self.items.is_reverse(*question) {
                        item.point.complement()
                    } else {
                        item.point
                    };
                    sum += f64::from(point.value());
                }
                None => missing.push(*question),
            }
        }

        if !missing.is_empty() {
            return Err(IncompleteDimensionError {
                dimension,
                usable: ITEMS_PER_DIMENSION - missing.len(),
                required: ITEMS_PER_DIMENSION,
                missing_questions: missing,
            });
        }

        Ok(DimensionScore::new(sum / ITEMS_PER_DIMENSION as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(pairs: &[(u8, u8)]) -> Vec<NormalizedItem> {
        pairs
            .iter()
            .map(|(q, v)| NormalizedItem::new(*q, ScalePoint::try_from_i64(i64::from(*v)).unwrap()))
            .collect()
    }

    #[test]
    fn plain_dimension_is_arithmetic_mean() {
        let scorer = DimensionScorer::default();
        let eps = items(&[(5, 4), (10, 5), (15, 3), (20, 4), (25, 2)]);
        let score = scorer.score(Dimension::EmpathyPerspective, &eps).unwrap();
        assert_eq!(score.value(), 18.0 / 5.0);
    }

    #[test]
    fn reverse_item_is_complemented_before_averaging() {
        let scorer = DimensionScorer::default();
        // Q2 is reverse-keyed: raw 1 contributes 5.
        let tr = items(&[(2, 1), (7, 5), (12, 5), (17, 5), (22, 5)]);
        let score = scorer.score(Dimension::TaskRelational, &tr).unwrap();
        assert_eq!(score.value(), 5.0);
    }

    #[test]
    fn both_reverse_items_affect_only_their_dimensions() {
        let scorer = DimensionScorer::default();
        let all: Vec<NormalizedItem> = (1..=25u8)
            .map(|q| NormalizedItem::new(q, ScalePoint::StronglyAgree))
            .collect();

        // DT owns Q11 (reverse), TR owns Q2 (reverse).
        let dt = scorer.score(Dimension::DirectnessTransparency, &all).unwrap();
        let tr = scorer.score(Dimension::TaskRelational, &all).unwrap();
        let co = scorer.score(Dimension::ConflictOrientation, &all).unwrap();
        assert_eq!(dt.value(), 21.0 / 5.0);
        assert_eq!(tr.value(), 21.0 / 5.0);
        assert_eq!(co.value(), 5.0);
    }

    #[test]
    fn midpoint_answers_stay_at_midpoint_when_reversed() {
        let scorer = DimensionScorer::default();
        let dt = items(&[(1, 3), (6, 3), (11, 3), (16, 3), (21, 3)]);
        assert_eq!(
            scorer.score(Dimension::DirectnessTransparency, &dt).unwrap().value(),
            3.0
        );
    }

    #[test]
    fn missing_items_make_dimension_incomplete() {
        let scorer = DimensionScorer::default();
        let partial = items(&[(3, 4), (13, 2), (23, 5)]);
        let err = scorer.score(Dimension::ConflictOrientation, &partial).unwrap_err();
        assert_eq!(err.dimension, Dimension::ConflictOrientation);
        assert_eq!(err.usable, 3);
        assert_eq!(err.missing_questions, vec![8, 18]);
        assert!(err.to_string().contains("3 of 5"));
    }

    #[test]
    fn items_of_other_dimensions_do_not_count() {
        let scorer = DimensionScorer::default();
        let wrong = items(&[(1, 5), (6, 5), (11, 5), (16, 5), (21, 5)]);
        let err = scorer.score(Dimension::CulturalAdaptability, &wrong).unwrap_err();
        assert_eq!(err.usable, 0);
        assert_eq!(err.missing_questions, vec![4, 9, 14, 19, 24]);
    }

    fn point() -> impl Strategy<Value = ScalePoint> {
        (0usize..5).prop_map(|idx| ScalePoint::ALL[idx])
    }

    proptest! {
        #[test]
        fn permuted_items_give_bit_identical_scores(
            values in prop::array::uniform5(point()),
            rotation in 0usize..5,
        ) {
            let scorer = DimensionScorer::default();
            let questions = *scorer.item_map().questions(Dimension::DirectnessTransparency);
            let ordered: Vec<NormalizedItem> = questions
                .iter()
                .zip(values)
                .map(|(q, p)| NormalizedItem::new(*q, p))
                .collect();
            let mut permuted = ordered.clone();
            permuted.rotate_left(rotation);
            permuted.reverse();

            let a = scorer.score(Dimension::DirectnessTransparency, &ordered).unwrap();
            let b = scorer.score(Dimension::DirectnessTransparency, &permuted).unwrap();
            prop_assert_eq!(a.value().to_bits(), b.value().to_bits());
        }

        #[test]
        fn scores_stay_on_scale(values in prop::array::uniform5(point())) {
            let scorer = DimensionScorer::default();
            let questions = *scorer.item_map().questions(Dimension::TaskRelational);
            let all: Vec<NormalizedItem> = questions
                .iter()
                .zip(values)
                .map(|(q, p)| NormalizedItem::new(*q, p))
                .collect();
            let score = scorer.score(Dimension::TaskRelational, &all).unwrap().value();
            prop_assert!((DimensionScore::MIN..=DimensionScore::MAX).contains(&score));
        }
    }
}
