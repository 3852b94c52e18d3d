//! Feature vector fed to the personality network.
//!
//! Layout: the 67 raw answers regrouped by constitution in canonical order
//! (平和 slice first), followed by the 9 scores in canonical order.

use crate::domain::foundation::{AnswerSet, Constitution, QUESTION_COUNT};
use crate::domain::scoring::ConstitutionScores;

/// Length of the feature vector.
pub const FEATURE_COUNT: usize = QUESTION_COUNT + 9;

/// Builds the network input for one submission.
pub fn build_features(answers: &AnswerSet, scores: &ConstitutionScores) -> Vec<f32> {
    let mut features = Vec::with_capacity(FEATURE_COUNT);
    for constitution in Constitution::all() {
        features.extend(
            answers
                .slice_of(*constitution)
                .iter()
                .map(|a| f32::from(a.value())),
        );
    }
    features.extend(scores.iter().map(|(_, v)| v as f32));
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_put_balanced_slice_first() {
        let mut values = [1u8; QUESTION_COUNT];
        for v in &mut values[59..] {
            *v = 5;
        }
        let answers = AnswerSet::from_values(&values).unwrap();
        let features = build_features(&answers, &ConstitutionScores::ZERO);

        assert_eq!(features.len(), FEATURE_COUNT);
        assert!(features[..8].iter().all(|v| *v == 5.0));
        assert!(features[8..QUESTION_COUNT].iter().all(|v| *v == 1.0));
    }

    #[test]
    fn features_follow_canonical_slice_order() {
        let mut values = [1u8; QUESTION_COUNT];
        // 气虚 occupies 15..23 in the questionnaire
        for v in &mut values[15..23] {
            *v = 4;
        }
        let answers = AnswerSet::from_values(&values).unwrap();
        let features = build_features(&answers, &ConstitutionScores::ZERO);
        // after the 8 balanced items
        assert!(features[8..16].iter().all(|v| *v == 4.0));
        assert_eq!(features[16], 1.0);
    }

    #[test]
    fn features_end_with_canonical_scores() {
        let scores = ConstitutionScores::ZERO
            .with(Constitution::Balanced, 62.5)
            .with(Constitution::Inherited, 12.25);
        let features = build_features(&AnswerSet::uniform(3).unwrap(), &scores);
        assert_eq!(features[QUESTION_COUNT], 62.5);
        assert_eq!(features[FEATURE_COUNT - 1], 12.25);
    }
}
