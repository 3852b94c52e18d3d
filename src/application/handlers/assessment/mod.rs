//! Assessment handlers.

mod assess_answers;
mod import_payload;
mod record_submission;

pub use assess_answers::{AssessAnswersCommand, AssessAnswersHandler, Assessment};
pub use import_payload::{ImportPayloadCommand, ImportPayloadHandler, ImportedDiagnosis};
pub use record_submission::{RecordSubmissionCommand, RecordSubmissionHandler, RecordSubmissionResult};
