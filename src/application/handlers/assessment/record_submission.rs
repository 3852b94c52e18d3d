//! RecordSubmissionHandler - Persists a consenting submission for research.

use std::sync::Arc;

use crate::domain::foundation::AnswerSet;
use crate::domain::report::{Consent, ResearchRecord};
use crate::ports::{ResearchLog, StorageError};

use super::Assessment;

/// Command to record one submission.
#[derive(Debug, Clone)]
pub struct RecordSubmissionCommand {
    pub assessment: Assessment,
    pub answers: AnswerSet,
    pub consent: Consent,
}

/// Outcome of a record request.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSubmissionResult {
    Recorded(ResearchRecord),
    /// Consent was declined; nothing was written.
    Skipped,
}

/// Handler writing research records.
pub struct RecordSubmissionHandler {
    log: Arc<dyn ResearchLog>,
}

impl RecordSubmissionHandler {
    pub fn new(log: Arc<dyn ResearchLog>) -> Self {
        Self { log }
    }

    /// # Errors
    ///
    /// `StorageError` when the log cannot be written. Scoring results held
    /// by the caller are unaffected.
    pub fn handle(&self, cmd: RecordSubmissionCommand) -> Result<RecordSubmissionResult, StorageError> {
        if !cmd.consent.is_granted() {
            tracing::debug!("Consent declined, submission not recorded");
            return Ok(RecordSubmissionResult::Skipped);
        }

        let record = ResearchRecord::new(
            &cmd.consent,
            cmd.assessment.personality,
            cmd.assessment.dominant,
            cmd.assessment.scores,
            &cmd.answers,
        );
        self.log.append(&record).map_err(|e| {
            tracing::warn!("Failed to record submission: {}", e);
            e
        })?;
        Ok(RecordSubmissionResult::Recorded(record))
    }
}
