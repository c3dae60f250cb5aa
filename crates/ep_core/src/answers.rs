//! Validated survey input: a fixed-length sheet of Likert answers.
//!
//! The engine is only defined for a complete sheet of 21 values in 1..=5.
//! Unanswered slots are a caller concern: substitute a neutral value (see
//! [`AnswerSheet::from_partial`]) before scoring. Malformed input fails fast
//! with a structured error; nothing is coerced.

use crate::errors::CoreError;

/// Number of survey questions; sheet length is checked against this.
pub const QUESTION_COUNT: usize = 21;

/// A single Likert-scale answer, guaranteed in 1..=5.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Answer(u8);

impl Answer {
    pub const MIN: Answer = Answer(1);
    pub const MAX: Answer = Answer(5);
    /// The neutral midpoint callers substitute for unanswered questions.
    pub const NEUTRAL: Answer = Answer(3);

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (1..=5).contains(&value) {
            Ok(Answer(value))
        } else {
            Err(CoreError::ValueOutOfRange(value))
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// A complete sheet of answers, positionally aligned with the question list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerSheet([Answer; QUESTION_COUNT]);

impl AnswerSheet {
    /// Build from raw values; rejects wrong length and out-of-range values.
    pub fn from_values(values: &[u8]) -> Result<Self, CoreError> {
        if values.len() != QUESTION_COUNT {
            return Err(CoreError::WrongAnswerCount {
                expected: QUESTION_COUNT,
                got: values.len(),
            });
        }
        let mut sheet = [Answer::NEUTRAL; QUESTION_COUNT];
        for (index, &value) in values.iter().enumerate() {
            sheet[index] =
                Answer::new(value).map_err(|_| CoreError::AnswerOutOfRange { index, value })?;
        }
        Ok(AnswerSheet(sheet))
    }

    /// Build from an in-progress sheet, substituting `fill` for unanswered
    /// slots. This is the caller-side neutral-default contract; the scoring
    /// stages themselves never see absent answers.
    pub fn from_partial(values: &[Option<u8>], fill: Answer) -> Result<Self, CoreError> {
        if values.len() != QUESTION_COUNT {
            return Err(CoreError::WrongAnswerCount {
                expected: QUESTION_COUNT,
                got: values.len(),
            });
        }
        let mut sheet = [fill; QUESTION_COUNT];
        for (index, slot) in values.iter().enumerate() {
            if let Some(value) = *slot {
                sheet[index] =
                    Answer::new(value).map_err(|_| CoreError::AnswerOutOfRange { index, value })?;
            }
        }
        Ok(AnswerSheet(sheet))
    }

    /// Every slot set to the same value. Used by the normalizer to compute
    /// per-elective theoretical maxima through the real scoring path.
    pub fn uniform(answer: Answer) -> Self {
        AnswerSheet([answer; QUESTION_COUNT])
    }

    #[inline]
    pub fn get(&self, index: usize) -> Answer {
        self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = Answer> + '_ {
        self.0.iter().copied()
    }
}
