//! Property tests for the scoring and mapping stages.
//!
//! Every stage must stay inside its documented range for any valid input:
//! scores in [0, 100], element energies in [10, 95], and fallback labels
//! drawn from the fixed table.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cyber_nj::domain::foundation::{
    AnswerSet, Constitution, Polarity, QuestionBank, QuestionItem, QUESTION_COUNT,
};
use cyber_nj::domain::mapping::{
    fallback_label, label_for, ElementsMapper, ElementsPolicy, ELEMENT_MAX, ELEMENT_MIN,
};
use cyber_nj::domain::scoring::{ConstitutionScores, DiagnosisSelector, ScoreCalculator};

fn answers_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=5, QUESTION_COUNT)
}

fn polarity_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), QUESTION_COUNT)
}

fn scores_strategy() -> impl Strategy<Value = ConstitutionScores> {
    prop::array::uniform9(0.0f64..=100.0).prop_map(ConstitutionScores::from_array)
}

fn bank_with(reversed: &[bool]) -> QuestionBank {
    let items: Vec<QuestionItem> = QuestionBank::positive_layout()
        .items()
        .iter()
        .zip(reversed)
        .map(|(item, negative)| {
            let polarity = if *negative {
                Polarity::Negative
            } else {
                Polarity::Positive
            };
            item.clone().with_polarity(polarity)
        })
        .collect();
    QuestionBank::new(items).unwrap()
}

proptest! {
    #[test]
    fn scores_stay_in_range(values in answers_strategy(), reversed in polarity_strategy()) {
        let answers = AnswerSet::from_values(&values).unwrap();
        let scores = ScoreCalculator::calculate(&bank_with(&reversed), &answers).unwrap();
        for (_, v) in scores.iter() {
            prop_assert!((0.0..=100.0).contains(&v), "score {} out of range", v);
        }
    }

    #[test]
    fn reversing_every_item_mirrors_scores(values in answers_strategy()) {
        let answers = AnswerSet::from_values(&values).unwrap();
        let straight = ScoreCalculator::calculate(&bank_with(&[false; QUESTION_COUNT]), &answers).unwrap();
        let reversed = ScoreCalculator::calculate(&bank_with(&[true; QUESTION_COUNT]), &answers).unwrap();
        for c in Constitution::all() {
            prop_assert!((straight.get(*c) + reversed.get(*c) - 100.0).abs() < 0.011);
        }
    }

    #[test]
    fn elements_stay_in_range_and_are_deterministic(scores in scores_strategy()) {
        for policy in [ElementsPolicy::Enhanced, ElementsPolicy::Linear] {
            let mapper = ElementsMapper::new(policy);
            let first = mapper.map(&scores);
            prop_assert_eq!(first, mapper.map(&scores));
            for (_, v) in first.iter() {
                prop_assert!((ELEMENT_MIN..=ELEMENT_MAX).contains(&v));
            }
        }
    }

    #[test]
    fn fallback_label_comes_from_table(scores in scores_strategy()) {
        let label = fallback_label(scores.iter_questionnaire());
        prop_assert!(Constitution::all().iter().any(|c| label_for(*c) == label));
        prop_assert_eq!(label, fallback_label(scores.iter_questionnaire()));
    }

    #[test]
    fn dominant_is_baseline_only_under_override(scores in scores_strategy()) {
        let dominant = DiagnosisSelector::dominant(&scores);
        if dominant.is_baseline() {
            prop_assert!(scores.get(Constitution::Balanced) >= 60.0);
            prop_assert!(scores.iter().filter(|(c, _)| !c.is_baseline()).all(|(_, v)| v < 40.0));
        }
    }

    #[test]
    fn random_profile_scores_target_highly(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (target, answers) = AnswerSet::random_profile(&mut rng);
        let scores = ScoreCalculator::calculate_by_layout(&answers);
        // target slice is all 4-5 (>= 75); other slices are at most 3 (<= 50)
        prop_assert!(scores.get(target) >= 75.0);
        for c in Constitution::all().iter().filter(|c| **c != target) {
            prop_assert!(scores.get(*c) <= 50.0);
        }
    }
}
