//! QuestionBankSource port

use crate::domain::foundation::{DomainError, QuestionBank};

/// Provider of the 67-item questionnaire.
///
/// Implementations return `QuestionBankInvalid` when the content cannot form
/// a valid bank.
pub trait QuestionBankSource: Send + Sync {
    /// Load and validate the question bank.
    fn load(&self) -> Result<QuestionBank, DomainError>;
}
