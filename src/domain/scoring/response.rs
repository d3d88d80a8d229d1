//! Raw survey responses as delivered by intake.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ParticipantIdentity, ValidationError};

/// Number of questions in the instrument.
pub const QUESTION_COUNT: usize = 25;

/// Number of free-text follow-up questions passed through to the report.
pub const FREE_RESPONSE_COUNT: usize = 4;

/// One raw answer cell before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Missing,
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Missing => write!(f, "<missing>"),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// The 25 answer cells of one participant, keyed by 1-based question number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RawValue>", into = "Vec<RawValue>")]
pub struct SurveyResponses(Vec<RawValue>);

impl SurveyResponses {
    /// Creates the response set, rejecting anything but exactly 25 cells.
    pub fn try_new(values: Vec<RawValue>) -> Result<Self, ValidationError> {
        if values.len() != QUESTION_COUNT {
            return Err(ValidationError::out_of_range(
                "responses",
                QUESTION_COUNT as f64,
                QUESTION_COUNT as f64,
                values.len() as f64,
            ));
        }
        Ok(Self(values))
    }

    /// Returns the raw cell for a 1-based question number.
    pub fn get(&self, question: u8) -> Option<&RawValue> {
        usize::from(question)
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
    }

    /// Iterates `(question, value)` in ascending question order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &RawValue)> {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, value)| (idx as u8 + 1, value))
    }
}

impl TryFrom<Vec<RawValue>> for SurveyResponses {
    type Error = ValidationError;

    fn try_from(values: Vec<RawValue>) -> Result<Self, Self::Error> {
        Self::try_new(values)
    }
}

impl From<SurveyResponses> for Vec<RawValue> {
    fn from(responses: SurveyResponses) -> Self {
        responses.0
    }
}

/// Free-text answers (RQ1..RQ4), passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeResponses([String; FREE_RESPONSE_COUNT]);

impl FreeResponses {
    /// Builds from up to four answers; missing ones become empty strings and
    /// extras are rejected.
    pub fn try_from_vec(values: Vec<String>) -> Result<Self, ValidationError> {
        if values.len() > FREE_RESPONSE_COUNT {
            return Err(ValidationError::out_of_range(
                "free_responses",
                0.0,
                FREE_RESPONSE_COUNT as f64,
                values.len() as f64,
            ));
        }
        let mut answers: [String; FREE_RESPONSE_COUNT] = Default::default();
        for (slot, value) in answers.iter_mut().zip(values) {
            *slot = value;
        }
        Ok(Self(answers))
    }

    pub fn as_slice(&self) -> &[String; FREE_RESPONSE_COUNT] {
        &self.0
    }
}

/// One intake row: identity, the 25 answers, and free-text answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRow {
    pub identity: ParticipantIdentity,
    pub responses: SurveyResponses,
    #[serde(default)]
    pub free_responses: FreeResponses,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(n: usize) -> Vec<RawValue> {
        (0..n).map(|_| RawValue::from(3)).collect()
    }

    #[test]
    fn survey_responses_require_exactly_25_cells() {
        assert!(SurveyResponses::try_new(cells(25)).is_ok());
        assert!(SurveyResponses::try_new(cells(24)).is_err());
        assert!(SurveyResponses::try_new(cells(26)).is_err());
    }

    #[test]
    fn get_is_one_based() {
        let mut values = cells(25);
        values[0] = RawValue::text("Agree");
        values[24] = RawValue::from(5);
        let responses = SurveyResponses::try_new(values).unwrap();

        assert_eq!(responses.get(1), Some(&RawValue::text("Agree")));
        assert_eq!(responses.get(25), Some(&RawValue::Number(5.0)));
        assert_eq!(responses.get(0), None);
        assert_eq!(responses.get(26), None);
    }

    #[test]
    fn raw_value_deserializes_untagged() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[4, "Agree", null, 2.5]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawValue::Number(4.0),
                RawValue::text("Agree"),
                RawValue::Missing,
                RawValue::Number(2.5),
            ]
        );
    }

    #[test]
    fn free_responses_pad_missing_answers() {
        let free = FreeResponses::try_from_vec(vec!["first".into(), "second".into()]).unwrap();
        assert_eq!(free.as_slice()[1], "second");
        assert_eq!(free.as_slice()[3], "");
    }

    #[test]
    fn free_responses_reject_extras() {
        let five = (0..5).map(|i| i.to_string()).collect();
        assert!(FreeResponses::try_from_vec(five).is_err());
    }
}
