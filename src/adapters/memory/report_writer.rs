//! In-Memory Report Writer

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_batch, ReportBatch, ReportWriter, WriteError, WriteReceipt};

/// Keeps every written batch. Enforces the same column contract as the
/// file writers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportWriter {
    batches: Arc<RwLock<Vec<ReportBatch>>>,
}

impl InMemoryReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All batches written so far
    pub async fn batches(&self) -> Vec<ReportBatch> {
        self.batches.read().await.clone()
    }

    /// Most recent batch, if any
    pub async fn last(&self) -> Option<ReportBatch> {
        self.batches.read().await.last().cloned()
    }
}

#[async_trait]
impl ReportWriter for InMemoryReportWriter {
    async fn write(&self, batch: &ReportBatch) -> Result<WriteReceipt, WriteError> {
        validate_batch(batch)?;

        let mut batches = self.batches.write().await;
        batches.push(batch.clone());
        Ok(WriteReceipt {
            location: format!("memory://batch/{}", batches.len()),
            rows: batch.records.len(),
            icons: batch.icons.len(),
        })
    }
}
