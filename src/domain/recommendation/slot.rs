//! Recommendation categories, slot entries, and the nine-slot result.

use serde::Serialize;
use std::fmt;

use crate::domain::scoring::DimensionResult;

/// Slots per category.
pub const SLOTS_PER_CATEGORY: usize = 3;

/// The three recommendation headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "KS")]
    Strengths,
    #[serde(rename = "DA")]
    DevelopmentAreas,
    #[serde(rename = "PR")]
    Priorities,
}

impl Category {
    /// Categories in output order.
    pub const ALL: [Category; 3] = [
        Category::Strengths,
        Category::DevelopmentAreas,
        Category::Priorities,
    ];

    /// Column prefix (KS, DA, PR).
    pub fn code(&self) -> &'static str {
        match self {
            Category::Strengths => "KS",
            Category::DevelopmentAreas => "DA",
            Category::Priorities => "PR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Strengths => "Key Strengths",
            Category::DevelopmentAreas => "Development Areas",
            Category::Priorities => "Priority Recommendations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which placeholder wording a padded slot takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// The category has no real entry at all.
    NoneIdentified,
    /// The category has some real entries, but fewer than three.
    NoAdditional,
}

/// Content of one slot: a real dimension or a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotEntry {
    Real(DimensionResult),
    Placeholder { placeholder: PlaceholderKind },
}

impl SlotEntry {
    pub fn placeholder(kind: PlaceholderKind) -> Self {
        SlotEntry::Placeholder { placeholder: kind }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SlotEntry::Placeholder { .. })
    }

    /// The dimension result, when this is a real entry.
    pub fn result(&self) -> Option<&DimensionResult> {
        match self {
            SlotEntry::Real(result) => Some(result),
            SlotEntry::Placeholder { .. } => None,
        }
    }
}

/// One of the nine output positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationSlot {
    pub category: Category,
    /// 1-based position within the category.
    pub position: u8,
    pub entry: SlotEntry,
}

impl RecommendationSlot {
    /// Column prefix for this slot, e.g. `KS1`.
    pub fn column_prefix(&self) -> String {
        format!("{}{}", self.category.code(), self.position)
    }
}

/// The selector's output: three entries per category.
///
/// Priorities hold real dimensions only; the type has no room for a
/// placeholder there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub strengths: [SlotEntry; SLOTS_PER_CATEGORY],
    pub development: [SlotEntry; SLOTS_PER_CATEGORY],
    pub priorities: [DimensionResult; SLOTS_PER_CATEGORY],
}

impl Recommendations {
    /// All nine slots in output order (KS1..KS3, DA1..DA3, PR1..PR3).
    pub fn slots(&self) -> Vec<RecommendationSlot> {
        let strengths = self
            .strengths
            .iter()
            .map(|entry| (Category::Strengths, *entry));
        let development = self
            .development
            .iter()
            .map(|entry| (Category::DevelopmentAreas, *entry));
        let priorities = self
            .priorities
            .iter()
            .map(|result| (Category::Priorities, SlotEntry::Real(*result)));

        let mut slots = Vec::with_capacity(SLOTS_PER_CATEGORY * Category::ALL.len());
        for (idx, (category, entry)) in strengths.chain(development).chain(priorities).enumerate() {
            slots.push(RecommendationSlot {
                category,
                position: (idx % SLOTS_PER_CATEGORY) as u8 + 1,
                entry,
            });
        }
        slots
    }
}
