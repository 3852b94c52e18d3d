//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessAnswersCommand, AssessAnswersHandler, Assessment, ImportPayloadCommand,
    ImportPayloadHandler, ImportedDiagnosis, RecordSubmissionCommand, RecordSubmissionHandler,
    RecordSubmissionResult,
};
