//! Participant record and the output column contract.

use serde::Serialize;

use super::formatter::FormattedSlot;
use crate::domain::foundation::ParticipantIdentity;
use crate::domain::scoring::{DimensionProfile, FreeResponses};

/// Output columns, in the order every writer must use.
#[rustfmt::skip]
pub const REQUIRED_COLUMNS: [&str; 41] = [
    "Date", "ID", "Name", "Email",
    "DT_Score", "TR_Score", "CO_Score", "CA_Score", "EP_Score",
    "KS1_Icon", "KS1_Title", "KS1_Body",
    "KS2_Icon", "KS2_Title", "KS2_Body",
    "KS3_Icon", "KS3_Title", "KS3_Body",
    "DA1_Icon", "DA1_Title", "DA1_Body",
    "DA2_Icon", "DA2_Title", "DA2_Body",
    "DA3_Icon", "DA3_Title", "DA3_Body",
    "PR1_Icon", "PR1_Title", "PR1_Body",
    "PR2_Icon", "PR2_Title", "PR2_Body",
    "PR3_Icon", "PR3_Title", "PR3_Body",
    "RQ1", "RQ2", "RQ3", "RQ4",
    "Summary",
];

/// One output row. Built once by the engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantRecord {
    pub identity: ParticipantIdentity,
    pub profile: DimensionProfile,
    /// Score cells in report order (DT, TR, CO, CA, EP).
    pub score_cells: [String; 5],
    /// KS1..KS3, DA1..DA3, PR1..PR3.
    pub slots: Vec<FormattedSlot>,
    pub free_responses: FreeResponses,
    pub summary: String,
}

impl ParticipantRecord {
    /// Cell values aligned with [`REQUIRED_COLUMNS`]. Icon cells hold the
    /// icon key.
    pub fn cells(&self) -> Vec<String> {
        let identity = &self.identity;
        let mut cells = Vec::with_capacity(REQUIRED_COLUMNS.len());

        cells.push(identity.date.clone());
        cells.push(identity.participant_id.as_str().to_string());
        cells.push(identity.name.clone());
        cells.push(identity.email.clone());
        cells.extend(self.score_cells.iter().cloned());
        for slot in &self.slots {
            cells.push(slot.icon.key().to_string());
            cells.push(slot.title.clone());
            cells.push(slot.body.clone());
        }
        cells.extend(self.free_responses.as_slice().iter().cloned());
        cells.push(self.summary.clone());

        cells
    }
}
