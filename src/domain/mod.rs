//! Domain layer containing the scoring and mapping logic.
//!
//! - `foundation` - Shared value objects: answers, labels, questionnaire layout
//! - `scoring` - Answers to constitution scores and the dominant diagnosis
//! - `mapping` - Scores to five-element energies and personality labels
//! - `report` - Diagnostic payloads and research records

pub mod foundation;
pub mod mapping;
pub mod report;
pub mod scoring;
