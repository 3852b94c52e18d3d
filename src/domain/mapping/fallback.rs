//! Rule-based personality label used when the network is unavailable.

use crate::domain::foundation::{Constitution, PersonalityType};
use crate::domain::scoring::first_max;

/// Label returned when no scores are available at all.
pub const EMPTY_SCORES_LABEL: PersonalityType = PersonalityType::Estj;

/// Fixed label for each dominant constitution.
pub fn label_for(constitution: Constitution) -> PersonalityType {
    match constitution {
        Constitution::Balanced => PersonalityType::Esfj,
        Constitution::QiDeficiency => PersonalityType::Isfj,
        Constitution::YangDeficiency => PersonalityType::Istj,
        Constitution::YinDeficiency => PersonalityType::Infj,
        Constitution::PhlegmDampness => PersonalityType::Isfp,
        Constitution::DampHeat => PersonalityType::Estp,
        Constitution::BloodStasis => PersonalityType::Intj,
        Constitution::QiStagnation => PersonalityType::Infp,
        Constitution::Inherited => PersonalityType::Enfp,
    }
}

/// Picks the label of the highest-scoring entry, baseline included.
///
/// Entries are expected in questionnaire order so ties resolve the same way
/// as the diagnosis.
pub fn fallback_label(entries: impl IntoIterator<Item = (Constitution, f64)>) -> PersonalityType {
    match first_max(entries) {
        Some((dominant, _)) => label_for(dominant),
        None => EMPTY_SCORES_LABEL,
    }
}
