//! CCIP Profile - Survey scoring and recommendation engine
//!
//! This crate turns 25-item Likert survey responses into per-participant
//! profiles: five dimension scores, banded interpretations, and ranked
//! strengths, development areas, and priorities laid out as a fixed-schema
//! report row.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
