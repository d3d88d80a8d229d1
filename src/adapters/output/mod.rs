//! Output Adapters
//!
//! Implementations of the ReportWriter port.
//!
//! - **JsonReportWriter** - Report document plus icon artwork on disk

mod json_report_writer;

pub use json_report_writer::JsonReportWriter;
