//! Assignment of survey questions to dimensions.

use crate::domain::foundation::{Dimension, ValidationError};

use super::QUESTION_COUNT;

/// Items owned by each dimension.
pub const ITEMS_PER_DIMENSION: usize = 5;

/// Partition of the 25 questions into five dimensions of five items, plus
/// the set of reverse-keyed questions.
///
/// Question numbers are 1-based. Each dimension's questions are stored in
/// ascending order, which is also the summation order used by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMap {
    questions: [[u8; ITEMS_PER_DIMENSION]; 5],
    reverse: Vec<u8>,
}

impl ItemMap {
    /// The survey's published layout: questions interleave across dimensions
    /// (Q1 DT, Q2 TR, Q3 CO, Q4 CA, Q5 EP, Q6 DT, ...) and Q2 and Q11 are
    /// reverse-keyed.
    pub fn standard() -> Self {
        Self {
            questions: [
                [1, 6, 11, 16, 21],
                [2, 7, 12, 17, 22],
                [3, 8, 13, 18, 23],
                [4, 9, 14, 19, 24],
                [5, 10, 15, 20, 25],
            ],
            reverse: vec![2, 11],
        }
    }

    /// Builds a custom layout.
    ///
    /// # Errors
    ///
    /// Rejects the map unless every dimension appears once, every question
    /// 1..=25 is owned by exactly one dimension, and every reverse item is
    /// one of those questions.
    pub fn try_new(
        assignments: [(Dimension, [u8; ITEMS_PER_DIMENSION]); 5],
        reverse: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        for dim in Dimension::ALL {
            let count = assignments.iter().filter(|(d, _)| *d == dim).count();
            if count != 1 {
                return Err(ValidationError::invalid_format(
                    "item_map",
                    format!("dimension {} assigned {} times", dim, count),
                ));
            }
        }

        let mut owners = [0usize; QUESTION_COUNT];
        for (_, questions) in &assignments {
            for q in questions {
                let idx = usize::from(*q)
                    .checked_sub(1)
                    .filter(|idx| *idx < QUESTION_COUNT)
                    .ok_or_else(|| {
                        ValidationError::out_of_range(
                            "question",
                            1.0,
                            QUESTION_COUNT as f64,
                            f64::from(*q),
                        )
                    })?;
                owners[idx] += 1;
            }
        }
        if let Some(idx) = owners.iter().position(|count| *count != 1) {
            return Err(ValidationError::invalid_format(
                "item_map",
                format!("question {} owned {} times", idx + 1, owners[idx]),
            ));
        }

        if let Some(q) = reverse
            .iter()
            .find(|q| !(1..=QUESTION_COUNT as u8).contains(*q))
        {
            return Err(ValidationError::invalid_format(
                "reverse_items",
                format!("question {} is not part of the instrument", q),
            ));
        }

        let mut table = [[0u8; ITEMS_PER_DIMENSION]; 5];
        for (dim, questions) in assignments {
            let mut questions = questions;
            questions.sort_unstable();
            table[dim.index()] = questions;
        }
        let mut reverse = reverse;
        reverse.sort_unstable();
        reverse.dedup();

        Ok(Self {
            questions: table,
            reverse,
        })
    }

    /// Questions owned by a dimension, ascending.
    pub fn questions(&self, dimension: Dimension) -> &[u8; ITEMS_PER_DIMENSION] {
        &self.questions[dimension.index()]
    }

    /// Dimension owning a question, if any.
    pub fn dimension_of(&self, question: u8) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|d| self.questions(*d).contains(&question))
    }

    /// Whether a question is reverse-keyed.
    pub fn is_reverse(&self, question: u8) -> bool {
        self.reverse.binary_search(&question).is_ok()
    }
}

impl Default for ItemMap {
    fn default() -> Self {
        Self::standard()
    }
}
