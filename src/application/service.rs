//! AssessmentService - Wires ports, adapters and handlers from configuration.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::adapters::{CsvResearchLog, FsModelArtifactSource, FsQuestionBankSource};
use crate::config::{AppConfig, DEFAULT_MODEL_PATH};
use crate::domain::foundation::{AnswerSet, DomainError, QuestionBank};
use crate::domain::mapping::{ElementsMapper, MappingFacade, PersonalityClassifier};
use crate::domain::report::Consent;
use crate::ports::{QuestionBankSource, ResearchLog, StorageError};

use super::handlers::{
    AssessAnswersCommand, AssessAnswersHandler, Assessment, ImportPayloadCommand,
    ImportPayloadHandler, ImportedDiagnosis, RecordSubmissionCommand, RecordSubmissionHandler,
    RecordSubmissionResult,
};

/// Process-wide classifier backed by the artifact at [`DEFAULT_MODEL_PATH`].
static DEFAULT_CLASSIFIER: Lazy<Arc<PersonalityClassifier>> = Lazy::new(|| {
    Arc::new(PersonalityClassifier::new(Arc::new(
        FsModelArtifactSource::new(DEFAULT_MODEL_PATH),
    )))
});

/// Shared handle to the default classifier.
pub fn default_classifier() -> Arc<PersonalityClassifier> {
    Arc::clone(&DEFAULT_CLASSIFIER)
}

/// Entry point for one questionnaire pipeline.
pub struct AssessmentService {
    assess: AssessAnswersHandler,
    record: RecordSubmissionHandler,
    import: ImportPayloadHandler,
}

impl AssessmentService {
    /// Builds a service from explicit collaborators.
    pub fn new(bank: QuestionBank, facade: MappingFacade, log: Arc<dyn ResearchLog>) -> Self {
        Self {
            assess: AssessAnswersHandler::new(Arc::new(bank), Arc::new(facade)),
            record: RecordSubmissionHandler::new(log),
            import: ImportPayloadHandler::new(),
        }
    }

    /// Builds a service from configuration.
    ///
    /// The question bank is loaded eagerly; the model artifact is loaded on
    /// first use.
    ///
    /// # Errors
    ///
    /// `QuestionBankInvalid` when a configured bank file cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let bank = match &config.storage.question_bank_path {
            Some(path) => FsQuestionBankSource::new(path).load()?,
            None => QuestionBank::positive_layout(),
        };

        let classifier = if config.model.artifact_path.as_os_str() == DEFAULT_MODEL_PATH
            && config.model.sha256.is_none()
        {
            default_classifier()
        } else {
            let mut source = FsModelArtifactSource::new(&config.model.artifact_path);
            if let Some(digest) = &config.model.sha256 {
                source = source.with_checksum(digest.clone());
            }
            Arc::new(PersonalityClassifier::new(Arc::new(source)))
        };

        let facade = MappingFacade::new(
            ElementsMapper::new(config.mapping.elements_policy),
            classifier,
        );
        let log = Arc::new(CsvResearchLog::new(&config.storage.research_log_path));

        tracing::info!(
            policy = ?config.mapping.elements_policy,
            model = %config.model.artifact_path.display(),
            "Assessment service ready"
        );
        Ok(Self::new(bank, facade, log))
    }

    /// Scores and maps one questionnaire.
    pub fn assess(&self, answers: &AnswerSet) -> Result<Assessment, DomainError> {
        self.assess.handle(AssessAnswersCommand {
            answers: answers.clone(),
        })
    }

    /// Writes a research record when consent was granted.
    pub fn record_submission(
        &self,
        assessment: &Assessment,
        answers: &AnswerSet,
        consent: Consent,
    ) -> Result<RecordSubmissionResult, StorageError> {
        self.record.handle(RecordSubmissionCommand {
            assessment: assessment.clone(),
            answers: answers.clone(),
            consent,
        })
    }

    /// Parses a pasted diagnostic payload.
    pub fn import_payload(&self, text: &str) -> Result<ImportedDiagnosis, DomainError> {
        self.import.handle(ImportPayloadCommand {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryResearchLog;
    use crate::domain::foundation::{Constitution, PersonalityType, QUESTION_COUNT};
    use crate::domain::mapping::PersonalitySource;
    use tempfile::TempDir;

    #[test]
    fn service_assesses_and_records() {
        let log = InMemoryResearchLog::new();
        let service = AssessmentService::new(
            QuestionBank::positive_layout(),
            MappingFacade::new(
                ElementsMapper::default(),
                Arc::new(PersonalityClassifier::fallback_only()),
            ),
            Arc::new(log.clone()),
        );

        let answers = AnswerSet::uniform(5).unwrap();
        let assessment = service.assess(&answers).unwrap();
        // every category at 100: first pathological in questionnaire order
        assert_eq!(assessment.dominant, Constitution::YangDeficiency);

        let consent = Consent::Granted {
            gender: "男".to_string(),
            self_reported: None,
        };
        service
            .record_submission(&assessment, &answers, consent)
            .unwrap();
        assert_eq!(log.count().unwrap(), 1);
    }

    #[test]
    fn service_from_config_without_artifact_falls_back() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.model.artifact_path = dir.path().join("missing.json");
        config.storage.research_log_path = dir.path().join("log.csv");

        let service = AssessmentService::from_config(&config).unwrap();

        let mut values = [1u8; QUESTION_COUNT];
        values[Constitution::BloodStasis.answer_range()].fill(5);
        let assessment = service.assess(&AnswerSet::from_values(&values).unwrap()).unwrap();
        assert_eq!(assessment.dominant, Constitution::BloodStasis);
        assert_eq!(assessment.personality_source, PersonalitySource::Fallback);
        assert_eq!(assessment.personality, PersonalityType::Intj);

        // all scores 0: 阳虚 is first in questionnaire order
        let flat = service.assess(&AnswerSet::uniform(1).unwrap()).unwrap();
        assert_eq!(flat.personality, PersonalityType::Istj);
    }

    #[test]
    fn service_from_config_rejects_bad_bank() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.storage.question_bank_path = Some(dir.path().join("absent.yaml"));
        assert!(AssessmentService::from_config(&config).is_err());
    }

    #[test]
    fn default_classifier_is_shared() {
        assert!(Arc::ptr_eq(&default_classifier(), &default_classifier()));
    }
}
