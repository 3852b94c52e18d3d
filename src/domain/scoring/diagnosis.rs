//! Diagnosis Selector - picks the dominant constitution from a score set.

use crate::domain::foundation::Constitution;

use super::constitution_scores::first_max;
use super::ConstitutionScores;

/// Minimum baseline score for the baseline override.
pub const BASELINE_THRESHOLD: f64 = 60.0;

/// Pathological scores must stay below this for the baseline override.
pub const PATHOLOGICAL_CEILING: f64 = 40.0;

/// Selector for the dominant constitution.
pub struct DiagnosisSelector;

impl DiagnosisSelector {
    /// Returns the dominant constitution.
    ///
    /// The highest-scoring pathological constitution wins unless the baseline
    /// scores at least 60 while that maximum stays below 40. Ties between
    /// pathological constitutions go to the one listed first in
    /// questionnaire order: 阳虚, 阴虚, 气虚, 痰湿, 湿热, 血瘀, 气郁, 特禀.
    pub fn dominant(scores: &ConstitutionScores) -> Constitution {
        let pathological = scores.iter_questionnaire().filter(|(c, _)| !c.is_baseline());
        let Some((max_type, max_score)) = first_max(pathological) else {
            return Constitution::BASELINE;
        };

        if scores.get(Constitution::BASELINE) >= BASELINE_THRESHOLD
            && max_score < PATHOLOGICAL_CEILING
        {
            return Constitution::BASELINE;
        }

        max_type
    }

    /// Returns pathological constitutions at or above `threshold`, highest first.
    ///
    /// Useful for reporting secondary tendencies next to the dominant one.
    pub fn tendencies(scores: &ConstitutionScores, threshold: f64) -> Vec<(Constitution, f64)> {
        let mut found: Vec<_> = scores
            .iter_questionnaire()
            .filter(|(c, v)| !c.is_baseline() && *v >= threshold)
            .collect();
        // stable sort keeps questionnaire order among equal scores
        found.sort_by(|a, b| b.1.total_cmp(&a.1));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: f64) -> ConstitutionScores {
        ConstitutionScores::from_array([value; 9])
    }

    #[test]
    fn dominant_baseline_override_applies() {
        let scores = uniform(30.0).with(Constitution::Balanced, 70.0);
        assert_eq!(DiagnosisSelector::dominant(&scores), Constitution::Balanced);
    }

    #[test]
    fn dominant_override_fails_at_forty() {
        let scores = uniform(10.0)
            .with(Constitution::Balanced, 70.0)
            .with(Constitution::QiDeficiency, 50.0);
        assert_eq!(DiagnosisSelector::dominant(&scores), Constitution::QiDeficiency);

        let edge = uniform(10.0)
            .with(Constitution::Balanced, 70.0)
            .with(Constitution::DampHeat, 40.0);
        assert_eq!(DiagnosisSelector::dominant(&edge), Constitution::DampHeat);
    }

    #[test]
    fn dominant_override_needs_baseline_sixty() {
        let scores = uniform(10.0).with(Constitution::Balanced, 59.99);
        // all pathological tie at 10: first in questionnaire order wins
        assert_eq!(DiagnosisSelector::dominant(&scores), Constitution::YangDeficiency);
    }

    #[test]
    fn dominant_picks_highest_pathological() {
        let scores = uniform(20.0).with(Constitution::BloodStasis, 75.0);
        assert_eq!(DiagnosisSelector::dominant(&scores), Constitution::BloodStasis);
    }

    #[test]
    fn dominant_ties_follow_questionnaire_order() {
        let scores = uniform(0.0)
            .with(Constitution::Inherited, 80.0)
            .with(Constitution::PhlegmDampness, 80.0)
            .with(Constitution::QiDeficiency, 80.0);
        // 气虚 (15..23) comes before 痰湿 and 特禀 in the questionnaire
        assert_eq!(DiagnosisSelector::dominant(&scores), Constitution::QiDeficiency);
    }

    #[test]
    fn dominant_all_zero_is_first_pathological() {
        assert_eq!(
            DiagnosisSelector::dominant(&ConstitutionScores::ZERO),
            Constitution::YangDeficiency
        );
    }

    #[test]
    fn tendencies_sorted_highest_first() {
        let scores = uniform(10.0)
            .with(Constitution::YinDeficiency, 45.0)
            .with(Constitution::DampHeat, 70.0)
            .with(Constitution::Balanced, 90.0);
        let found = DiagnosisSelector::tendencies(&scores, 40.0);
        assert_eq!(
            found,
            vec![(Constitution::DampHeat, 70.0), (Constitution::YinDeficiency, 45.0)]
        );
    }
}
