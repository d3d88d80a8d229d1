//! ReportWriter port - lays participant records out under the column contract.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::RenderedIcon;
use crate::domain::report::{ParticipantRecord, REQUIRED_COLUMNS};

/// Records plus the icons they reference, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBatch {
    pub columns: Vec<String>,
    pub records: Vec<ParticipantRecord>,
    pub icons: Vec<RenderedIcon>,
}

impl ReportBatch {
    /// Batch using the required column list.
    pub fn new(records: Vec<ParticipantRecord>, icons: Vec<RenderedIcon>) -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records,
            icons,
        }
    }
}

/// One header position that differs from the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMismatch {
    pub position: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl fmt::Display for ColumnMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {}: expected {}, found {}",
            self.position,
            self.expected.as_deref().unwrap_or("<none>"),
            self.actual.as_deref().unwrap_or("<none>")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("schema mismatch: {}", join_mismatches(.0))]
    SchemaMismatch(Vec<ColumnMismatch>),

    #[error("row for participant {participant_id} has {actual} cells, expected {expected}")]
    RowWidth {
        participant_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("failed to serialize report: {0}")]
    Serialization(String),

    #[error("failed to write report: {0}")]
    Io(String),
}

fn join_mismatches(mismatches: &[ColumnMismatch]) -> String {
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Where and how much was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReceipt {
    pub location: String,
    pub rows: usize,
    pub icons: usize,
}

/// Checks a batch against the column contract before anything is written.
///
/// Every mismatching header position is reported, not just the first.
pub fn validate_batch(batch: &ReportBatch) -> Result<(), WriteError> {
    let width = batch.columns.len().max(REQUIRED_COLUMNS.len());
    let mismatches: Vec<ColumnMismatch> = (0..width)
        .filter_map(|position| {
            let expected = REQUIRED_COLUMNS.get(position).map(|c| c.to_string());
            let actual = batch.columns.get(position).cloned();
            (expected != actual).then_some(ColumnMismatch {
                position,
                expected,
                actual,
            })
        })
        .collect();
    if !mismatches.is_empty() {
        return Err(WriteError::SchemaMismatch(mismatches));
    }

    for record in &batch.records {
        let actual = record.cells().len();
        if actual != REQUIRED_COLUMNS.len() {
            return Err(WriteError::RowWidth {
                participant_id: record.identity.participant_id.to_string(),
                expected: REQUIRED_COLUMNS.len(),
                actual,
            });
        }
    }

    Ok(())
}

/// Persists a validated batch. Implementations must call [`validate_batch`]
/// first and write nothing when it fails.
#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn write(&self, batch: &ReportBatch) -> Result<WriteReceipt, WriteError>;
}
