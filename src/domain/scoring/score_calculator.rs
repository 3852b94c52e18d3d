//! Score Calculator - questionnaire answers to constitution scores.
//!
//! Uses the standard conversion formula for 1-5 Likert items:
//!
//! ```text
//! score = clamp(((raw - n) / (n * 4)) * 100, 0, 100)
//! ```
//!
//! where `n` is the number of items in a constitution and `raw` the sum of
//! their polarity-adjusted answers. All-minimum answers floor at 0 and
//! all-maximum answers reach 100.

use crate::domain::foundation::{AnswerSet, Constitution, QuestionBank, ValidationError};

use super::ConstitutionScores;

/// Calculator for constitution scores.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Scores an answer set against a question bank.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if the bank and answers differ in length. Nothing is
    /// padded or truncated.
    pub fn calculate(
        bank: &QuestionBank,
        answers: &AnswerSet,
    ) -> Result<ConstitutionScores, ValidationError> {
        if bank.len() != answers.len() {
            return Err(ValidationError::length_mismatch(
                "answers",
                bank.len(),
                answers.len(),
            ));
        }

        let mut sums = [0u32; 9];
        let mut counts = [0u32; 9];
        for (item, answer) in bank.items().iter().zip(answers.answers()) {
            let idx = item.category.index();
            sums[idx] += u32::from(answer.adjusted(item.polarity));
            counts[idx] += 1;
        }

        Ok(ConstitutionScores::from_entries(
            Constitution::all()
                .iter()
                .map(|c| (*c, Self::convert(sums[c.index()], counts[c.index()]))),
        ))
    }

    /// Scores an answer set using the fixed questionnaire layout with every
    /// item scored positively.
    pub fn calculate_by_layout(answers: &AnswerSet) -> ConstitutionScores {
        ConstitutionScores::from_entries(Constitution::all().iter().map(|c| {
            let slice = answers.slice_of(*c);
            let raw: u32 = slice.iter().map(|a| u32::from(a.value())).sum();
            (*c, Self::convert(raw, slice.len() as u32))
        }))
    }

    /// Applies the conversion formula, rounded to 2 decimal places.
    ///
    /// # Edge Cases
    /// - Zero items: Returns 0
    pub fn convert(raw: u32, n: u32) -> f64 {
        if n == 0 {
            return 0.0;
        }
        let raw = f64::from(raw);
        let n = f64::from(n);
        let converted = ((raw - n) / (n * 4.0) * 100.0).clamp(0.0, 100.0);
        round2(converted)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
