//! Closed set of icon identifiers handed to the rendering collaborator.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Dimension, ValidationError};

/// Icon shown next to a recommendation slot.
///
/// Three level icons and one priority icon per dimension. There is no
/// status (tick or cross) family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    LevelShield,
    LevelSeedling,
    LevelTools,
    Priority(Dimension),
}

impl IconId {
    /// Every identifier, level icons first.
    pub const ALL: [IconId; 8] = [
        IconId::LevelShield,
        IconId::LevelSeedling,
        IconId::LevelTools,
        IconId::Priority(Dimension::DirectnessTransparency),
        IconId::Priority(Dimension::TaskRelational),
        IconId::Priority(Dimension::ConflictOrientation),
        IconId::Priority(Dimension::CulturalAdaptability),
        IconId::Priority(Dimension::EmpathyPerspective),
    ];

    /// Stable key, e.g. `LEVEL_SHIELD` or `PR_CA`.
    pub fn key(&self) -> &'static str {
        match self {
            IconId::LevelShield => "LEVEL_SHIELD",
            IconId::LevelSeedling => "LEVEL_SEEDLING",
            IconId::LevelTools => "LEVEL_TOOLS",
            IconId::Priority(Dimension::DirectnessTransparency) => "PR_DT",
            IconId::Priority(Dimension::TaskRelational) => "PR_TR",
            IconId::Priority(Dimension::ConflictOrientation) => "PR_CO",
            IconId::Priority(Dimension::CulturalAdaptability) => "PR_CA",
            IconId::Priority(Dimension::EmpathyPerspective) => "PR_EP",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for IconId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconId::ALL
            .iter()
            .copied()
            .find(|icon| icon.key() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("icon", format!("unknown key '{}'", s)))
    }
}

impl Serialize for IconId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_MARKERS: [&str; 9] = [
        "✓", "✔", "✗", "✘", "☑", "☒", "TICK", "CHECK", "STATUS",
    ];

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = IconId::ALL.iter().map(IconId::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), IconId::ALL.len());
    }

    #[test]
    fn no_status_glyph_family() {
        for icon in IconId::ALL {
            let key = icon.key().to_uppercase();
            for marker in STATUS_MARKERS {
                assert!(!key.contains(marker), "{} looks like a status icon", key);
            }
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for icon in IconId::ALL {
            assert_eq!(icon.key().parse::<IconId>().unwrap(), icon);
        }
        assert!("CHECKMARK".parse::<IconId>().is_err());
    }

    #[test]
    fn serializes_as_key() {
        let json = serde_json::to_string(&IconId::Priority(Dimension::CulturalAdaptability)).unwrap();
        assert_eq!(json, "\"PR_CA\"");
    }
}
