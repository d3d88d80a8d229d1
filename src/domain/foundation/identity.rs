//! Participant identity fields carried through to the report row.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier of a survey participant as supplied by intake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new ParticipantId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::empty_field("participant_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantId> for String {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity columns of a participant row. Already resolved by intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantIdentity {
    pub participant_id: ParticipantId,
    pub name: String,
    pub email: String,
    pub date: String,
}

impl ParticipantIdentity {
    pub fn new(
        participant_id: ParticipantId,
        name: impl Into<String>,
        email: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            participant_id,
            name: name.into(),
            email: email.into(),
            date: date.into(),
        }
    }
}

impl fmt::Display for ParticipantIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.email.is_empty() {
            write!(f, "{} ({})", self.participant_id, self.name)
        } else {
            write!(f, "{} ({} <{}>)", self.participant_id, self.name, self.email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_id_rejects_blank() {
        let result = ParticipantId::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "participant_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn participant_id_trims() {
        assert_eq!(ParticipantId::new(" 42 ").unwrap().as_str(), "42");
    }

    #[test]
    fn identity_display_includes_email_when_present() {
        let id = ParticipantId::new("7").unwrap();
        let with = ParticipantIdentity::new(id.clone(), "Ada", "ada@example.com", "01/02/2024");
        let without = ParticipantIdentity::new(id, "Ada", "", "01/02/2024");
        assert_eq!(with.to_string(), "7 (Ada <ada@example.com>)");
        assert_eq!(without.to_string(), "7 (Ada)");
    }
}
