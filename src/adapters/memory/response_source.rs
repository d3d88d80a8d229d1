//! In-Memory Response Source

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::scoring::ResponseRow;
use crate::ports::{IntakeBatch, IntakeError, IntakeRejection, ResponseSource};

/// Serves a fixed set of rows and rejections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResponseSource {
    batch: Arc<RwLock<IntakeBatch>>,
}

impl InMemoryResponseSource {
    pub fn new(rows: Vec<ResponseRow>) -> Self {
        Self {
            batch: Arc::new(RwLock::new(IntakeBatch {
                rows,
                rejections: Vec::new(),
            })),
        }
    }

    /// Appends a row (useful for tests)
    pub async fn push(&self, row: ResponseRow) {
        self.batch.write().await.rows.push(row);
    }

    /// Appends an intake rejection (useful for tests)
    pub async fn reject(&self, rejection: IntakeRejection) {
        self.batch.write().await.rejections.push(rejection);
    }
}

#[async_trait]
impl ResponseSource for InMemoryResponseSource {
    async fn load(&self) -> Result<IntakeBatch, IntakeError> {
        Ok(self.batch.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ParticipantId, ParticipantIdentity};
    use crate::domain::scoring::{FreeResponses, RawValue, SurveyResponses};

    fn row(id: &str) -> ResponseRow {
        ResponseRow {
            identity: ParticipantIdentity::new(ParticipantId::new(id).unwrap(), "N", "", ""),
            responses: SurveyResponses::try_new((0..25).map(|_| RawValue::from(3)).collect())
                .unwrap(),
            free_responses: FreeResponses::default(),
        }
    }

    #[tokio::test]
    async fn load_returns_rows_and_rejections() {
        let source = InMemoryResponseSource::new(vec![row("P-1")]);
        source.push(row("P-2")).await;
        source
            .reject(IntakeRejection {
                line: 3,
                participant_id: None,
                reason: "missing participant id".to_string(),
            })
            .await;

        let batch = source.load().await.unwrap();
        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.rejections.len(), 1);
    }
}
