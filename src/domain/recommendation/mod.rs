//! Recommendation module - strengths, development areas, and priorities.

mod selector;
mod slot;

pub use selector::RecommendationSelector;
pub use slot::{
    Category, PlaceholderKind, RecommendationSlot, Recommendations, SlotEntry, SLOTS_PER_CATEGORY,
};
