//! Scoring Module - Pure domain services turning answers into constitution scores.
//!
//! # Components
//!
//! - `ConstitutionScores` - Total 9-entry score map, clamped to 0-100
//! - `ScoreCalculator` - Conversion formula over polarity-adjusted answers
//! - `DiagnosisSelector` - Dominant constitution with the baseline override
//!
//! All functions are pure (no side effects) and stateless.

mod constitution_scores;
mod diagnosis;
mod score_calculator;

pub use constitution_scores::{ConstitutionScores, SCORE_MAX, SCORE_MIN};
pub(crate) use constitution_scores::first_max;
pub use diagnosis::{DiagnosisSelector, BASELINE_THRESHOLD, PATHOLOGICAL_CEILING};
pub use score_calculator::ScoreCalculator;
