//! Diagnostic payload exchanged as free text with an external assistant.
//!
//! The JSON object sits between `[[JSON_START]]` and `[[JSON_END]]`. Text
//! without markers is searched for the first `{` and last `}` instead, and
//! markdown code fences are stripped before parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{Constitution, DomainError, Element, PersonalityType};
use crate::domain::scoring::{first_max, ConstitutionScores};

pub const JSON_START: &str = "[[JSON_START]]";
pub const JSON_END: &str = "[[JSON_END]]";

/// Placeholder when the payload names no personality.
pub const UNKNOWN_PERSONALITY: &str = "Unknown";

static MARKED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\[JSON_START\]\](.*?)\[\[JSON_END\]\]").expect("valid marker regex")
});

/// Parsed diagnostic payload.
///
/// Score and element maps are `None` when the payload omitted them or they
/// held no recognised labels. Element values are kept exactly as given; only
/// energies computed by the mapper are clamped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis_scores: Option<ConstitutionScores>,
    pub predicted_mbti: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_elements: Option<BTreeMap<Element, f64>>,
    pub analysis_summary: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPayload {
    diagnosis_scores: HashMap<String, f64>,
    predicted_mbti: Option<String>,
    five_elements: HashMap<String, f64>,
    analysis_summary: String,
}

impl DiagnosticPayload {
    /// Extracts and parses the payload embedded in `text`.
    ///
    /// # Errors
    ///
    /// `PayloadParseError` when no JSON object can be located or it does not
    /// parse.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let block = extract_block(text)
            .ok_or_else(|| DomainError::payload("No JSON object found in the pasted text"))?;
        let cleaned = block.replace("```json", "").replace("```", "");

        let raw: RawPayload = serde_json::from_str(cleaned.trim())
            .map_err(|e| DomainError::payload(format!("Invalid diagnostic JSON: {}", e)))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawPayload) -> Self {
        let scores: Vec<_> = raw
            .diagnosis_scores
            .iter()
            .filter_map(|(label, value)| match Constitution::from_label(label) {
                Ok(c) => Some((c, *value)),
                Err(_) => {
                    tracing::debug!(label = %label, "Ignoring unknown constitution in payload");
                    None
                }
            })
            .collect();

        let elements: BTreeMap<_, _> = raw
            .five_elements
            .iter()
            .filter_map(|(label, value)| match Element::from_label(label) {
                Ok(e) => Some((e, *value)),
                Err(_) => {
                    tracing::debug!(label = %label, "Ignoring unknown element in payload");
                    None
                }
            })
            .collect();

        Self {
            diagnosis_scores: (!scores.is_empty()).then(|| ConstitutionScores::from_entries(scores)),
            predicted_mbti: raw
                .predicted_mbti
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_PERSONALITY.to_string()),
            five_elements: (!elements.is_empty()).then_some(elements),
            analysis_summary: raw.analysis_summary,
        }
    }

    /// Renders the payload wrapped in markers, ready to paste back.
    pub fn to_marked_text(&self) -> Result<String, DomainError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::payload(format!("Cannot render payload: {}", e)))?;
        Ok(format!("{}\n{}\n{}", JSON_START, json, JSON_END))
    }

    /// The predicted personality, if it is one of the 16 codes.
    pub fn personality(&self) -> Option<PersonalityType> {
        self.predicted_mbti.parse().ok()
    }

    /// Highest-scoring constitution, baseline included.
    ///
    /// Ties go to the constitution listed first in questionnaire order, as in
    /// [`DiagnosisSelector`](crate::domain::scoring::DiagnosisSelector); the
    /// key order of the pasted JSON is not kept. `None` when the payload
    /// carried no scores.
    pub fn dominant_constitution(&self) -> Option<Constitution> {
        let scores = self.diagnosis_scores.as_ref()?;
        first_max(scores.iter_questionnaire()).map(|(c, _)| c)
    }
}

fn extract_block(text: &str) -> Option<&str> {
    if let Some(captures) = MARKED_BLOCK.captures(text) {
        return captures.get(1).map(|m| m.as_str());
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
