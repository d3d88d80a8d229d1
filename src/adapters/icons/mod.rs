//! Icon Adapters
//!
//! Implementations of the IconRenderer port.
//!
//! - **FileIconRenderer** - Pre-rendered PNG artwork read from a directory

mod file_icon_renderer;

pub use file_icon_renderer::FileIconRenderer;
