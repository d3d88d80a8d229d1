//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the vocabulary
//! of the profile engine.

mod band;
mod dimension;
mod errors;
mod identity;
mod scale_point;
mod score;

pub use band::Band;
pub use dimension::{Dimension, DimensionOrder};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use identity::{ParticipantId, ParticipantIdentity};
pub use scale_point::ScalePoint;
pub use score::DimensionScore;
