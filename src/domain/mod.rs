//! Domain layer containing the scoring engine and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (dimensions, scale points, bands, scores, errors)
//! - `scoring` - Likert normalization, dimension scoring, band classification
//! - `recommendation` - Selection of strengths, development areas, and priorities
//! - `report` - Text bank, formatting, icons, and the output column contract
//! - `engine` - Composition of the above into one row-to-record function

pub mod engine;
pub mod foundation;
pub mod recommendation;
pub mod report;
pub mod scoring;

pub use engine::{EngineTables, ItemFailure, ProfileEngine, RowRejection};
