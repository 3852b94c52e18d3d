//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionBankSource` - Provider of the 67-item questionnaire
//! - `ModelArtifactSource` - Provider of the personality network weights
//! - `ResearchLog` - Append-only store for consenting submissions

mod model_artifact_source;
mod question_bank_source;
mod research_log;

pub use model_artifact_source::{ArtifactError, ModelArtifactSource};
pub use question_bank_source::QuestionBankSource;
pub use research_log::{ResearchLog, StorageError};
