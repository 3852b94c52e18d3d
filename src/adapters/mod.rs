//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `model` - Personality model artifact sources
//! - `question_bank` - Question bank files
//! - `research_log` - Research record persistence

pub mod model;
pub mod question_bank;
pub mod research_log;

pub use model::{FsModelArtifactSource, StaticModelArtifactSource};
pub use question_bank::FsQuestionBankSource;
pub use research_log::{CsvResearchLog, InMemoryResearchLog};
