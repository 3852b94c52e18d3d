//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod service;

pub use handlers::{
    AssessAnswersCommand, AssessAnswersHandler, Assessment, ImportPayloadCommand,
    ImportPayloadHandler, ImportedDiagnosis, RecordSubmissionCommand, RecordSubmissionHandler,
    RecordSubmissionResult,
};
pub use service::{default_classifier, AssessmentService};
