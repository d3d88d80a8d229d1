//! Recommendation Selector - assigns dimensions to the nine slots.

use std::cmp::Ordering;

use super::slot::{PlaceholderKind, Recommendations, SlotEntry, SLOTS_PER_CATEGORY};
use crate::domain::foundation::DimensionOrder;
use crate::domain::scoring::{DimensionProfile, DimensionResult};

/// Deterministic selection of strengths, development areas, and priorities.
///
/// Every ranking sorts explicitly by score and then by position in the
/// tie-break order, so the output never depends on the order in which the
/// profile lists its dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationSelector {
    order: DimensionOrder,
}

impl RecommendationSelector {
    pub fn new(order: DimensionOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &DimensionOrder {
        &self.order
    }

    /// High and Very High dimensions, score descending.
    pub fn rank_strengths(&self, profile: &DimensionProfile) -> Vec<DimensionResult> {
        let mut candidates: Vec<DimensionResult> = profile
            .iter()
            .filter(|r| r.band.is_strength())
            .copied()
            .collect();
        candidates.sort_by(|a, b| self.descending(a, b));
        candidates
    }

    /// Developing and Low dimensions, score ascending.
    pub fn rank_development(&self, profile: &DimensionProfile) -> Vec<DimensionResult> {
        let mut candidates: Vec<DimensionResult> = profile
            .iter()
            .filter(|r| r.band.is_development())
            .copied()
            .collect();
        candidates.sort_by(|a, b| self.ascending(a, b));
        candidates
    }

    /// Every dimension, score ascending.
    pub fn rank_all_ascending(&self, profile: &DimensionProfile) -> Vec<DimensionResult> {
        let mut all: Vec<DimensionResult> = profile.iter().copied().collect();
        all.sort_by(|a, b| self.ascending(a, b));
        all
    }

    /// Fills all nine slots.
    pub fn select(&self, profile: &DimensionProfile) -> Recommendations {
        let strengths = self.rank_strengths(profile);
        let development = self.rank_development(profile);

        // Priorities: development candidates first (pre-padding), then the
        // lowest remaining dimensions, without repeats.
        let ascending = self.rank_all_ascending(profile);
        let mut priorities: Vec<DimensionResult> = Vec::with_capacity(SLOTS_PER_CATEGORY);
        for candidate in development.iter().chain(ascending.iter()) {
            if priorities.len() == SLOTS_PER_CATEGORY {
                break;
            }
            if !priorities.iter().any(|p| p.dimension == candidate.dimension) {
                priorities.push(*candidate);
            }
        }

        Recommendations {
            strengths: pad(&strengths),
            development: pad(&development),
            priorities: [0, 1, 2].map(|idx| priorities.get(idx).copied().unwrap_or(ascending[idx])),
        }
    }

    fn ascending(&self, a: &DimensionResult, b: &DimensionResult) -> Ordering {
        a.score
            .value()
            .total_cmp(&b.score.value())
            .then_with(|| self.tie_break(a, b))
    }

    fn descending(&self, a: &DimensionResult, b: &DimensionResult) -> Ordering {
        b.score
            .value()
            .total_cmp(&a.score.value())
            .then_with(|| self.tie_break(a, b))
    }

    fn tie_break(&self, a: &DimensionResult, b: &DimensionResult) -> Ordering {
        self.order
            .position(a.dimension)
            .cmp(&self.order.position(b.dimension))
    }
}

/// Takes up to three ranked candidates and pads the rest with placeholders.
fn pad(ranked: &[DimensionResult]) -> [SlotEntry; SLOTS_PER_CATEGORY] {
    let kind = if ranked.is_empty() {
        PlaceholderKind::NoneIdentified
    } else {
        PlaceholderKind::NoAdditional
    };
    [0, 1, 2].map(|idx| match ranked.get(idx) {
        Some(result) => SlotEntry::Real(*result),
        None => SlotEntry::placeholder(kind),
    })
}
