//! ConstitutionScores - total map from the 9 constitutions to a 0-100 score.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::Constitution;

/// Lowest possible constitution score.
pub const SCORE_MIN: f64 = 0.0;

/// Highest possible constitution score.
pub const SCORE_MAX: f64 = 100.0;

/// Scores for all 9 constitutions, each clamped to `[0, 100]`.
///
/// Always complete: constructors default absent constitutions to 0 and
/// replace non-finite values with 0. Serialized as a label-keyed JSON
/// object in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstitutionScores([f64; 9]);

impl ConstitutionScores {
    /// All scores zero.
    pub const ZERO: Self = Self([0.0; 9]);

    /// Builds scores from (constitution, value) pairs.
    ///
    /// Missing constitutions score 0; later duplicates overwrite earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = (Constitution, f64)>) -> Self {
        let mut values = [0.0; 9];
        for (constitution, value) in entries {
            values[constitution.index()] = clamp_score(value);
        }
        Self(values)
    }

    /// Builds scores from a canonical-order array.
    pub fn from_array(values: [f64; 9]) -> Self {
        Self(values.map(clamp_score))
    }

    /// Returns one constitution's score.
    pub fn get(&self, constitution: Constitution) -> f64 {
        self.0[constitution.index()]
    }

    /// Returns a copy with one score replaced.
    pub fn with(mut self, constitution: Constitution, value: f64) -> Self {
        self.0[constitution.index()] = clamp_score(value);
        self
    }

    /// Returns the scores as a canonical-order array.
    pub fn to_array(&self) -> [f64; 9] {
        self.0
    }

    /// Iterates in canonical order (baseline first).
    pub fn iter(&self) -> impl Iterator<Item = (Constitution, f64)> + '_ {
        Constitution::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Iterates in questionnaire order, the order ties are broken in.
    pub fn iter_questionnaire(&self) -> impl Iterator<Item = (Constitution, f64)> + '_ {
        Constitution::questionnaire_order()
            .iter()
            .map(move |c| (*c, self.get(*c)))
    }
}

impl Default for ConstitutionScores {
    fn default() -> Self {
        Self::ZERO
    }
}

fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(SCORE_MIN, SCORE_MAX)
    } else {
        SCORE_MIN
    }
}

/// Returns the first highest-scoring entry; ties keep the earlier entry.
pub(crate) fn first_max(
    entries: impl IntoIterator<Item = (Constitution, f64)>,
) -> Option<(Constitution, f64)> {
    entries.into_iter().fold(None, |best, (c, v)| match best {
        Some((_, best_v)) if v <= best_v => best,
        _ => Some((c, v)),
    })
}

impl Serialize for ConstitutionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (constitution, value) in self.iter() {
            map.serialize_entry(constitution.label(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConstitutionScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<Constitution, f64>::deserialize(deserializer)?;
        Ok(Self::from_entries(raw))
    }
}
