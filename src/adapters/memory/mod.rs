//! In-Memory Adapters
//!
//! Port implementations that keep everything in memory. Useful for tests
//! and for embedding the engine without touching the filesystem.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::{InMemoryIconRenderer, InMemoryReportWriter, InMemoryResponseSource};
//!
//! let source = InMemoryResponseSource::new(rows);
//! let icons = InMemoryIconRenderer::with_placeholder_artwork();
//! let writer = InMemoryReportWriter::new();
//! ```

mod icon_renderer;
mod report_writer;
mod response_source;

pub use icon_renderer::InMemoryIconRenderer;
pub use report_writer::InMemoryReportWriter;
pub use response_source::InMemoryResponseSource;
