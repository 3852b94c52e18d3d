//! ImportPayloadHandler - Reads a diagnostic payload pasted from an assistant.

use serde::Serialize;

use crate::domain::foundation::{Constitution, DomainError, PersonalityType};
use crate::domain::report::DiagnosticPayload;

/// Command carrying the pasted text.
#[derive(Debug, Clone)]
pub struct ImportPayloadCommand {
    pub text: String,
}

/// Parsed payload plus the values derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedDiagnosis {
    pub payload: DiagnosticPayload,
    /// `None` when the payload carried no scores.
    pub dominant: Option<Constitution>,
    /// `None` when `predicted_mbti` is not one of the 16 codes.
    pub personality: Option<PersonalityType>,
}

/// Handler for payload imports. Stateless.
#[derive(Debug, Default)]
pub struct ImportPayloadHandler;

impl ImportPayloadHandler {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// `PayloadParseError` when the text holds no parseable JSON object.
    pub fn handle(&self, cmd: ImportPayloadCommand) -> Result<ImportedDiagnosis, DomainError> {
        let payload = DiagnosticPayload::parse(&cmd.text).map_err(|e| {
            tracing::info!("Rejected diagnostic payload: {}", e);
            e
        })?;

        Ok(ImportedDiagnosis {
            dominant: payload.dominant_constitution(),
            personality: payload.personality(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn handle_derives_dominant_and_personality() {
        let text = r#"[[JSON_START]]{"diagnosis_scores": {"气郁质": 77, "平和质": 30}, "predicted_mbti": "INFP"}[[JSON_END]]"#;
        let out = ImportPayloadHandler::new()
            .handle(ImportPayloadCommand { text: text.to_string() })
            .unwrap();
        assert_eq!(out.dominant, Some(Constitution::QiStagnation));
        assert_eq!(out.personality, Some(PersonalityType::Infp));
    }

    #[test]
    fn handle_rejects_malformed_text() {
        let err = ImportPayloadHandler::new()
            .handle(ImportPayloadCommand {
                text: "just prose".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PayloadParseError);
    }
}
