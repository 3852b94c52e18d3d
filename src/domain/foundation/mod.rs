//! Foundation module - Shared domain primitives.
//!
//! Contains the closed label sets (constitutions, elements, personality
//! codes), questionnaire value objects and error types that form the
//! vocabulary of the profiling domain.

mod answer;
mod constitution;
mod element;
mod errors;
mod personality;
mod question;

pub use answer::{Answer, AnswerSet, Polarity};
pub use constitution::{Constitution, QUESTION_COUNT};
pub use element::Element;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use personality::PersonalityType;
pub use question::{QuestionBank, QuestionItem};
