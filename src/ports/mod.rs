//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the scoring engine and the outside world. Adapters implement these ports.
//!
//! - `ResponseSource` - Supplies cleaned survey rows
//! - `IconRenderer` - Turns icon identifiers into embeddable images
//! - `ReportWriter` - Validates the column contract and persists records

mod icon_renderer;
mod report_writer;
mod response_source;

pub use icon_renderer::{compute_checksum, IconRenderer, RenderError, RenderedIcon};
pub use report_writer::{
    validate_batch, ColumnMismatch, ReportBatch, ReportWriter, WriteError, WriteReceipt,
};
pub use response_source::{IntakeBatch, IntakeError, IntakeRejection, ResponseSource};
