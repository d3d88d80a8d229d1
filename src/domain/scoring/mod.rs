//! Scoring module - from raw answers to banded dimension scores.
//!
//! Composition order is fixed: normalize each answer, complement
//! reverse-keyed items, average each dimension on the native 1-5 scale,
//! then classify.

mod band_classifier;
mod item_map;
mod normalizer;
mod profile;
mod response;
mod scorer;

pub use band_classifier::{BandClassifier, BandThresholds};
pub use item_map::{ItemMap, ITEMS_PER_DIMENSION};
pub use normalizer::{LikertNormalizer, NormalizationError, NormalizationReason};
pub use profile::{DimensionProfile, DimensionResult};
pub use response::{
    FreeResponses, RawValue, ResponseRow, SurveyResponses, FREE_RESPONSE_COUNT, QUESTION_COUNT,
};
pub use scorer::{DimensionScorer, IncompleteDimensionError, NormalizedItem};
