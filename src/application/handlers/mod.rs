//! Application handlers.
//!
//! Command handlers that orchestrate the engine and its ports.

mod generate_profiles;

pub use generate_profiles::{
    BatchSummary, GenerateProfilesCommand, GenerateProfilesHandler, IconFailure, RejectedRow,
};
