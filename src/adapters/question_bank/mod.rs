//! Question Bank Adapters
//!
//! - **FsQuestionBankSource** - YAML or JSON file on disk

mod fs_question_bank_source;

pub use fs_question_bank_source::FsQuestionBankSource;
