//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the engine to external systems:
//! - `intake` - Response sources (JSON Lines files)
//! - `icons` - Icon renderers (pre-rendered PNG artwork)
//! - `output` - Report writers (JSON document on disk)
//! - `memory` - In-memory implementations of every port

pub mod icons;
pub mod intake;
pub mod memory;
pub mod output;

pub use icons::FileIconRenderer;
pub use intake::JsonLinesResponseSource;
pub use memory::{InMemoryIconRenderer, InMemoryReportWriter, InMemoryResponseSource};
pub use output::JsonReportWriter;
