//! Flattened research record for one submission.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::foundation::{AnswerSet, Constitution, PersonalityType};
use crate::domain::scoring::ConstitutionScores;

/// Timestamp layout in the research log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Written in place of withheld demographics.
pub const NOT_APPLICABLE: &str = "N/A";

/// Written when a participant does not know their own personality type.
pub const UNKNOWN_SELF_REPORT: &str = "Unknown";

/// Participant's answer to the data donation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Consent {
    Granted {
        gender: String,
        self_reported: Option<PersonalityType>,
    },
    Declined,
}

impl Consent {
    pub fn is_granted(&self) -> bool {
        matches!(self, Consent::Granted { .. })
    }
}

/// One row of the research log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchRecord {
    pub timestamp: DateTime<Local>,
    pub consent: bool,
    pub gender: String,
    pub real_mbti: String,
    pub ai_mbti: PersonalityType,
    pub constitution_main: Constitution,
    pub scores: ConstitutionScores,
    pub raw_answers: String,
}

impl ResearchRecord {
    /// Builds a record stamped with the current local time.
    pub fn new(
        consent: &Consent,
        ai_mbti: PersonalityType,
        constitution_main: Constitution,
        scores: ConstitutionScores,
        answers: &AnswerSet,
    ) -> Self {
        Self::at(Local::now(), consent, ai_mbti, constitution_main, scores, answers)
    }

    /// Builds a record with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Local>,
        consent: &Consent,
        ai_mbti: PersonalityType,
        constitution_main: Constitution,
        scores: ConstitutionScores,
        answers: &AnswerSet,
    ) -> Self {
        let (gender, real_mbti) = match consent {
            Consent::Granted {
                gender,
                self_reported,
            } => (
                gender.clone(),
                self_reported
                    .map(|p| p.code().to_string())
                    .unwrap_or_else(|| UNKNOWN_SELF_REPORT.to_string()),
            ),
            Consent::Declined => (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string()),
        };

        Self {
            timestamp,
            consent: consent.is_granted(),
            gender,
            real_mbti,
            ai_mbti,
            constitution_main,
            scores,
            raw_answers: answers.to_digits(),
        }
    }

    /// Column names, in row order.
    pub fn header() -> Vec<String> {
        let mut columns: Vec<String> = [
            "timestamp",
            "consent",
            "gender",
            "real_mbti",
            "ai_mbti",
            "constitution_main",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        columns.extend(
            Constitution::all()
                .iter()
                .map(|c| format!("score_{}", c.pinyin())),
        );
        columns.push("raw_answers_str".to_string());
        columns
    }

    /// Field values, aligned with [`ResearchRecord::header`].
    pub fn columns(&self) -> Vec<String> {
        let mut values = vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            if self.consent { "Yes" } else { "No" }.to_string(),
            self.gender.clone(),
            self.real_mbti.clone(),
            self.ai_mbti.code().to_string(),
            self.constitution_main.label().to_string(),
        ];
        values.extend(self.scores.iter().map(|(_, v)| format_score(v)));
        values.push(self.raw_answers.clone());
        values
    }
}

/// Formats a score with at least one decimal place, e.g. `0.0` or `62.5`.
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
