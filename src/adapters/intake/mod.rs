//! Intake Adapters
//!
//! Implementations of the ResponseSource port.
//!
//! - **JsonLinesResponseSource** - One participant per line of a `.jsonl` file

mod json_lines;

pub use json_lines::{
    looks_like_email, name_from_email, normalize_date, resolve_name_and_email,
    JsonLinesResponseSource, ANONYMOUS,
};
