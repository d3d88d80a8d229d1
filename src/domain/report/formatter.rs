//! Text Formatter - titles, bodies, icons, score cells, and the summary.

use serde::Serialize;
use std::sync::Arc;

use super::body::{first_unit, three_line_body};
use super::icons::IconId;
use super::rounding::round_half_up;
use super::text_bank::{PlaceholderText, TextBank};
use crate::domain::foundation::Band;
use crate::domain::recommendation::{
    Category, PlaceholderKind, RecommendationSelector, RecommendationSlot, SlotEntry,
};
use crate::domain::scoring::{DimensionProfile, DimensionResult};

/// Dimensions named in each summary list.
const SUMMARY_LIST_LIMIT: usize = 3;

/// A slot ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSlot {
    pub category: Category,
    pub position: u8,
    pub icon: IconId,
    pub title: String,
    /// Exactly three lines separated by `\n`.
    pub body: String,
    pub placeholder: bool,
}

impl FormattedSlot {
    /// Column prefix for this slot, e.g. `DA2`.
    pub fn column_prefix(&self) -> String {
        format!("{}{}", self.category.code(), self.position)
    }
}

/// Renders selected slots and profile-wide text from a [`TextBank`].
#[derive(Debug, Clone)]
pub struct TextFormatter {
    bank: Arc<TextBank>,
    selector: RecommendationSelector,
}

impl TextFormatter {
    /// `selector` supplies the rankings (and tie-break order) used by the summary.
    pub fn new(bank: Arc<TextBank>, selector: RecommendationSelector) -> Self {
        Self { bank, selector }
    }

    pub fn bank(&self) -> &TextBank {
        &self.bank
    }

    /// `"<Label> - <score to one decimal>"`.
    pub fn format_title(&self, result: &DimensionResult) -> String {
        format!(
            "{} - {}",
            result.dimension.label(),
            round_half_up(result.score.value(), 1)
        )
    }

    /// `"<score to two decimals> (<band>) - <first unit of interpretation>"`.
    pub fn format_score_cell(&self, result: &DimensionResult) -> String {
        let interpretation = self.bank.interpretation(result.dimension, result.band);
        format!(
            "{} ({}) - {}",
            round_half_up(result.score.value(), 2),
            result.band.label(),
            first_unit(interpretation)
        )
    }

    /// Icon, title, and three-line body for one slot.
    pub fn format_slot(&self, slot: &RecommendationSlot) -> FormattedSlot {
        let (icon, title, body) = match (slot.category, &slot.entry) {
            (Category::Strengths, SlotEntry::Real(result)) => {
                let text = self
                    .bank
                    .strength_text(result.dimension, result.band)
                    .unwrap_or_else(|| self.bank.interpretation(result.dimension, result.band));
                (IconId::LevelShield, self.format_title(result), three_line_body(text))
            }
            (Category::DevelopmentAreas, SlotEntry::Real(result)) => {
                let icon = if result.band == Band::Developing {
                    IconId::LevelSeedling
                } else {
                    IconId::LevelTools
                };
                let text = self
                    .bank
                    .development_text(result.dimension, result.band)
                    .unwrap_or_else(|| self.bank.interpretation(result.dimension, result.band));
                (icon, self.format_title(result), three_line_body(text))
            }
            (Category::Priorities, SlotEntry::Real(result)) => (
                IconId::Priority(result.dimension),
                self.format_title(result),
                three_line_body(self.bank.priority_text(result.dimension)),
            ),
            (Category::Strengths, SlotEntry::Placeholder { placeholder }) => {
                placeholder_content(&self.bank.placeholders.strengths, *placeholder)
            }
            // Priorities never carry placeholders; development wording covers the case.
            (_, SlotEntry::Placeholder { placeholder }) => {
                placeholder_content(&self.bank.placeholders.development, *placeholder)
            }
        };

        FormattedSlot {
            category: slot.category,
            position: slot.position,
            icon,
            title,
            body,
            placeholder: slot.entry.is_placeholder(),
        }
    }

    /// Three sentences driven by the full profile, never by slot contents.
    pub fn format_summary(&self, profile: &DimensionProfile) -> String {
        let summary = &self.bank.summary;

        let strengths = labels(&self.selector.rank_strengths(profile));
        let development = labels(&self.selector.rank_development(profile));

        let first = if strengths.is_empty() {
            summary.strengths_fallback.clone()
        } else {
            format!("{} {}.", summary.strengths_lead, and_join(&strengths))
        };
        let second = if development.is_empty() {
            summary.development_fallback.clone()
        } else {
            format!("{} {}.", summary.development_lead, and_join(&development))
        };
        let third = if development.is_empty() {
            &summary.guidance_without_development
        } else {
            &summary.guidance_with_development
        };

        format!("{} {} {}", first, second, third)
    }
}

fn placeholder_content(text: &PlaceholderText, kind: PlaceholderKind) -> (IconId, String, String) {
    let title = match kind {
        PlaceholderKind::NoneIdentified => text.none_identified.clone(),
        PlaceholderKind::NoAdditional => text.no_additional.clone(),
    };
    (IconId::LevelTools, title, three_line_body(&text.body))
}

fn labels(ranked: &[DimensionResult]) -> Vec<&'static str> {
    ranked
        .iter()
        .take(SUMMARY_LIST_LIMIT)
        .map(|r| r.dimension.label())
        .collect()
}

/// "A", "A and B", "A, B, and C".
fn and_join(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
