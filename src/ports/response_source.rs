//! ResponseSource port - where raw survey rows come from.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::scoring::ResponseRow;

/// A source line that could not become a [`ResponseRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeRejection {
    /// 1-based line or row number within the source.
    pub line: usize,
    pub participant_id: Option<String>,
    pub reason: String,
}

/// Everything read from a source in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeBatch {
    pub rows: Vec<ResponseRow>,
    pub rejections: Vec<IntakeRejection>,
}

/// Errors that stop intake as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("response source not found: {0}")]
    NotFound(String),

    #[error("failed to read response source: {0}")]
    Io(String),
}

/// Supplies cleaned response rows with 25 uniquely keyed answers each.
///
/// Implementations resolve layout and identity columns; malformed rows are
/// returned as rejections rather than failing the whole load.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    async fn load(&self) -> Result<IntakeBatch, IntakeError>;
}
