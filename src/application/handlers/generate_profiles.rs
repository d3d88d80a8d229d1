//! GenerateProfilesHandler - Command handler turning a response source into a
//! written report.
//!
//! Flow: load rows, evaluate each row in isolation, render the icons its
//! slots reference, then validate and write the batch. A bad row or a
//! missing icon never stops the batch; only intake and write failures do.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantIdentity};
use crate::domain::report::{IconId, ParticipantRecord};
use crate::domain::{ItemFailure, ProfileEngine, RowRejection};
use crate::ports::{
    IconRenderer, IntakeRejection, RenderError, RenderedIcon, ReportBatch, ReportWriter,
    ResponseSource, WriteError, WriteReceipt,
};

/// Command to generate profiles for every row of the configured source.
#[derive(Debug, Clone)]
pub struct GenerateProfilesCommand {
    /// Skip icon rendering entirely; icon cells still carry their keys.
    pub render_icons: bool,
}

impl Default for GenerateProfilesCommand {
    fn default() -> Self {
        Self { render_icons: true }
    }
}

/// A row the engine refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub identity: ParticipantIdentity,
    pub reason: String,
    pub failures: Vec<ItemFailure>,
}

impl From<RowRejection> for RejectedRow {
    fn from(rejection: RowRejection) -> Self {
        Self {
            identity: rejection.identity().clone(),
            reason: rejection.to_string(),
            failures: rejection.failures().to_vec(),
        }
    }
}

/// An icon that could not be rendered for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconFailure {
    pub participant_id: String,
    /// Slot column prefix, e.g. `KS1`.
    pub slot: String,
    pub icon: IconId,
    pub error: String,
}

/// Outcome of one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub written: usize,
    pub rejected_rows: Vec<RejectedRow>,
    pub intake_rejections: Vec<IntakeRejection>,
    pub icon_failures: Vec<IconFailure>,
    pub receipt: WriteReceipt,
}

/// Handler for batch profile generation.
pub struct GenerateProfilesHandler {
    engine: Arc<ProfileEngine>,
    source: Arc<dyn ResponseSource>,
    renderer: Arc<dyn IconRenderer>,
    writer: Arc<dyn ReportWriter>,
}

impl GenerateProfilesHandler {
    pub fn new(
        engine: Arc<ProfileEngine>,
        source: Arc<dyn ResponseSource>,
        renderer: Arc<dyn IconRenderer>,
        writer: Arc<dyn ReportWriter>,
    ) -> Self {
        Self {
            engine,
            source,
            renderer,
            writer,
        }
    }

    pub async fn handle(&self, cmd: GenerateProfilesCommand) -> Result<BatchSummary, DomainError> {
        // 1. Load rows
        let intake = self.source.load().await.map_err(|e| {
            DomainError::new(ErrorCode::IntakeFailed, e.to_string())
        })?;
        tracing::info!(
            rows = intake.rows.len(),
            intake_rejections = intake.rejections.len(),
            "Generating profiles"
        );

        // 2. Evaluate each row on its own
        let mut records = Vec::with_capacity(intake.rows.len());
        let mut rejected_rows = Vec::new();
        for row in &intake.rows {
            match self.engine.evaluate(row) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    tracing::warn!(
                        participant_id = %rejection.identity().participant_id,
                        failures = rejection.failures().len(),
                        error = %rejection,
                        "Row rejected"
                    );
                    for failure in rejection.failures() {
                        tracing::debug!(
                            participant_id = %rejection.identity().participant_id,
                            question = failure.question,
                            error = %failure.error,
                            "Unusable answer"
                        );
                    }
                    rejected_rows.push(RejectedRow::from(rejection));
                }
            }
        }

        // 3. Render icons referenced by the records
        let (icons, icon_failures) = if cmd.render_icons {
            self.render_icons(&records).await
        } else {
            (Vec::new(), Vec::new())
        };

        // 4. Validate and write
        let written = records.len();
        let batch = ReportBatch::new(records, icons);
        let receipt = self.writer.write(&batch).await.map_err(write_error)?;

        tracing::info!(
            written,
            rejected = rejected_rows.len(),
            icon_failures = icon_failures.len(),
            location = %receipt.location,
            "Batch complete"
        );

        Ok(BatchSummary {
            written,
            rejected_rows,
            intake_rejections: intake.rejections,
            icon_failures,
            receipt,
        })
    }

    /// Renders each distinct icon once; failures are reported for every slot
    /// that uses the icon.
    async fn render_icons(
        &self,
        records: &[ParticipantRecord],
    ) -> (Vec<RenderedIcon>, Vec<IconFailure>) {
        let mut cache: HashMap<IconId, Result<RenderedIcon, RenderError>> = HashMap::new();
        let mut failures = Vec::new();

        for record in records {
            for slot in &record.slots {
                if !cache.contains_key(&slot.icon) {
                    let rendered = self.renderer.render(slot.icon).await;
                    cache.insert(slot.icon, rendered);
                }
                if let Some(Err(err)) = cache.get(&slot.icon) {
                    tracing::warn!(
                        participant_id = %record.identity.participant_id,
                        slot = %slot.column_prefix(),
                        icon = %slot.icon,
                        error = %err,
                        "Icon render failed"
                    );
                    failures.push(IconFailure {
                        participant_id: record.identity.participant_id.to_string(),
                        slot: slot.column_prefix(),
                        icon: slot.icon,
                        error: err.to_string(),
                    });
                }
            }
        }

        let icons = IconId::ALL
            .iter()
            .filter_map(|icon| match cache.remove(icon) {
                Some(Ok(rendered)) => Some(rendered),
                _ => None,
            })
            .collect();
        (icons, failures)
    }
}

fn write_error(err: WriteError) -> DomainError {
    let code = match &err {
        WriteError::SchemaMismatch(_) | WriteError::RowWidth { .. } => ErrorCode::SchemaMismatch,
        WriteError::Serialization(_) | WriteError::Io(_) => ErrorCode::WriteFailed,
    };
    DomainError::new(code, err.to_string())
}
