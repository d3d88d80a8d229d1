//! Profile engine - one response row in, one participant record out.
//!
//! The engine is a pure function of the row and its immutable tables. Rows
//! share nothing, so callers may evaluate them in any order or in parallel.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{
    Dimension, DimensionOrder, ParticipantIdentity, ValidationError,
};
use crate::domain::recommendation::RecommendationSelector;
use crate::domain::report::{ParticipantRecord, TextBank, TextBankError, TextFormatter};
use crate::domain::scoring::{
    BandClassifier, BandThresholds, DimensionProfile, DimensionResult, DimensionScorer,
    IncompleteDimensionError, ItemMap, LikertNormalizer, NormalizationError, NormalizedItem,
    ResponseRow,
};

/// Fixed tables the engine is built from.
#[derive(Debug, Clone)]
pub struct EngineTables {
    pub normalizer: LikertNormalizer,
    pub items: ItemMap,
    pub thresholds: BandThresholds,
    pub order: DimensionOrder,
    pub text_bank: Arc<TextBank>,
}

impl EngineTables {
    /// The survey's published tables and wording.
    pub fn standard() -> Result<Self, TextBankError> {
        Ok(Self {
            normalizer: LikertNormalizer::standard(),
            items: ItemMap::standard(),
            thresholds: BandThresholds::default(),
            order: DimensionOrder::STANDARD,
            text_bank: TextBank::builtin()?,
        })
    }
}

/// One answer that could not be normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFailure {
    pub question: u8,
    pub dimension: Option<Dimension>,
    #[serde(serialize_with = "serialize_display")]
    pub error: NormalizationError,
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dimension {
            Some(dim) => write!(f, "Q{} ({}): {}", self.question, dim, self.error),
            None => write!(f, "Q{}: {}", self.question, self.error),
        }
    }
}

/// Why a row produced no record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowRejection {
    #[error(
        "participant {identity}: {} unusable item(s), {} incomplete dimension(s)",
        .failures.len(),
        .incomplete.len()
    )]
    UnusableItems {
        identity: ParticipantIdentity,
        failures: Vec<ItemFailure>,
        incomplete: Vec<IncompleteDimensionError>,
    },

    #[error("participant {identity}: {source}")]
    InvalidProfile {
        identity: ParticipantIdentity,
        source: ValidationError,
    },
}

impl RowRejection {
    pub fn identity(&self) -> &ParticipantIdentity {
        match self {
            RowRejection::UnusableItems { identity, .. } => identity,
            RowRejection::InvalidProfile { identity, .. } => identity,
        }
    }

    /// Failing answers; empty for profile-level failures.
    pub fn failures(&self) -> &[ItemFailure] {
        match self {
            RowRejection::UnusableItems { failures, .. } => failures,
            RowRejection::InvalidProfile { .. } => &[],
        }
    }
}

/// Composes normalizer, scorer, classifier, selector, and formatter.
#[derive(Debug, Clone)]
pub struct ProfileEngine {
    normalizer: LikertNormalizer,
    scorer: DimensionScorer,
    classifier: BandClassifier,
    selector: RecommendationSelector,
    formatter: TextFormatter,
}

impl ProfileEngine {
    /// Builds an engine, validating the band thresholds.
    pub fn new(tables: EngineTables) -> Result<Self, ValidationError> {
        let classifier = BandClassifier::new(tables.thresholds)?;
        let selector = RecommendationSelector::new(tables.order);
        Ok(Self {
            normalizer: tables.normalizer,
            scorer: DimensionScorer::new(tables.items),
            classifier,
            selector,
            formatter: TextFormatter::new(tables.text_bank, selector),
        })
    }

    pub fn formatter(&self) -> &TextFormatter {
        &self.formatter
    }

    /// Scores and bands all five dimensions of a row.
    ///
    /// # Errors
    ///
    /// Any unusable answer rejects the row. The rejection lists every
    /// failing answer and every dimension left incomplete.
    pub fn profile(&self, row: &ResponseRow) -> Result<DimensionProfile, RowRejection> {
        let items = self.scorer.item_map();
        let mut normalized = Vec::new();
        let mut failures = Vec::new();

        for (question, raw) in row.responses.iter() {
            match self.normalizer.normalize(raw) {
                Ok(point) => normalized.push(NormalizedItem::new(question, point)),
                Err(error) => failures.push(ItemFailure {
                    question,
                    dimension: items.dimension_of(question),
                    error,
                }),
            }
        }

        let mut results = Vec::with_capacity(Dimension::ALL.len());
        let mut incomplete = Vec::new();
        for dimension in Dimension::ALL {
            match self.scorer.score(dimension, &normalized) {
                Ok(score) => results.push(DimensionResult::new(
                    dimension,
                    score,
                    self.classifier.classify(score),
                )),
                Err(err) => incomplete.push(err),
            }
        }

        if !failures.is_empty() || !incomplete.is_empty() {
            return Err(RowRejection::UnusableItems {
                identity: row.identity.clone(),
                failures,
                incomplete,
            });
        }

        DimensionProfile::try_new(results).map_err(|source| RowRejection::InvalidProfile {
            identity: row.identity.clone(),
            source,
        })
    }

    /// Evaluates one row into its report record.
    pub fn evaluate(&self, row: &ResponseRow) -> Result<ParticipantRecord, RowRejection> {
        let profile = self.profile(row)?;
        Ok(self.compose(row, profile))
    }

    fn compose(&self, row: &ResponseRow, profile: DimensionProfile) -> ParticipantRecord {
        let score_cells = Dimension::ALL.map(|dim| {
            profile
                .get(dim)
                .map(|result| self.formatter.format_score_cell(result))
                .unwrap_or_default()
        });
        let slots = self
            .selector
            .select(&profile)
            .slots()
            .iter()
            .map(|slot| self.formatter.format_slot(slot))
            .collect();
        let summary = self.formatter.format_summary(&profile);

        ParticipantRecord {
            identity: row.identity.clone(),
            profile,
            score_cells,
            slots,
            free_responses: row.free_responses.clone(),
            summary,
        }
    }
}

fn serialize_display<T: fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
