//! Report module - wording, layout, and the output column contract.

mod body;
mod formatter;
mod icons;
mod record;
mod rounding;
mod text_bank;

pub use body::{first_unit, split_units, three_line_body, BODY_LINES};
pub use formatter::{FormattedSlot, TextFormatter};
pub use icons::IconId;
pub use record::{ParticipantRecord, REQUIRED_COLUMNS};
pub use rounding::round_half_up;
pub use text_bank::{
    DevelopmentTexts, InterpretationTexts, PerDimension, PlaceholderText, PlaceholderTexts,
    StrengthTexts, SummaryTexts, TextBank, TextBankError, STATUS_MARKERS,
};
