//! Elements Mapper - constitution scores to five-element energies.
//!
//! Each element is a weighted sum of the nine normalised constitution scores
//! (one matrix row per element, one column per constitution in canonical
//! order), followed by a policy-specific rescale into `[10, 95]`.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::Element;
use crate::domain::scoring::ConstitutionScores;

/// Lowest element energy.
pub const ELEMENT_MIN: u8 = 10;

/// Highest element energy.
pub const ELEMENT_MAX: u8 = 95;

/// Weights for the enhanced policy.
///
/// Rows: 木 火 土 金 水. Columns: 平和 气虚 阳虚 阴虚 痰湿 湿热 血瘀 气郁 特禀.
pub const ENHANCED_WEIGHTS: [[f64; 9]; 5] = [
    [0.1, 0.1, 0.1, 0.3, 0.1, 0.2, 0.6, 0.9, 0.1],
    [0.1, 0.2, 0.1, 0.7, 0.1, 0.8, 0.5, 0.3, 0.1],
    [0.1, 0.8, 0.4, 0.1, 0.9, 0.5, 0.1, 0.2, 0.1],
    [0.1, 0.7, 0.2, 0.2, 0.4, 0.1, 0.1, 0.1, 0.9],
    [0.1, 0.1, 0.9, 0.6, 0.4, 0.2, 0.2, 0.1, 0.2],
];

/// Weights for the linear policy.
///
/// The balanced baseline contributes evenly (0.2) to every element.
pub const LINEAR_WEIGHTS: [[f64; 9]; 5] = [
    [0.2, 0.1, 0.1, 0.3, 0.1, 0.2, 0.5, 0.9, 0.1],
    [0.2, 0.2, 0.1, 0.7, 0.1, 0.8, 0.5, 0.3, 0.1],
    [0.2, 0.8, 0.4, 0.1, 0.9, 0.5, 0.1, 0.2, 0.1],
    [0.2, 0.7, 0.2, 0.2, 0.4, 0.1, 0.1, 0.1, 0.9],
    [0.2, 0.1, 0.9, 0.6, 0.4, 0.2, 0.2, 0.1, 0.2],
];

/// Pathological scores at or below this are zeroed by the enhanced policy.
pub const ENHANCED_SCORE_THRESHOLD: f64 = 50.0;

/// Exponent applied to raw energies by the enhanced policy.
pub const ENHANCED_EXPONENT: f64 = 1.5;

/// Lower end of the enhanced policy's rescaled span.
pub const ENHANCED_FLOOR: f64 = 20.0;

/// Upper end of the enhanced policy's rescaled span.
pub const ENHANCED_CEILING: f64 = 95.0;

/// How raw energies are turned into display values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementsPolicy {
    /// `raw * 60 + 20`, clamped.
    Linear,
    /// Thresholded inputs, `raw^1.5`, then min-max rescaled to `[20, 95]`.
    #[default]
    Enhanced,
}

/// Energies for all 5 elements, each in `[10, 95]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementsVector([u8; 5]);

impl ElementsVector {
    /// Builds a vector from (element, value) pairs, clamping into range.
    ///
    /// Missing elements take the minimum energy.
    pub fn from_entries(entries: impl IntoIterator<Item = (Element, i64)>) -> Self {
        let mut values = [ELEMENT_MIN; 5];
        for (element, value) in entries {
            values[element.index()] = clamp_energy(value);
        }
        Self(values)
    }

    /// Returns one element's energy.
    pub fn get(&self, element: Element) -> u8 {
        self.0[element.index()]
    }

    /// Iterates in element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        Element::all().iter().map(move |e| (*e, self.get(*e)))
    }

    /// Returns the strongest element; ties keep the earlier element.
    pub fn strongest(&self) -> Element {
        self.iter()
            .fold((Element::Wood, 0u8), |best, (e, v)| if v > best.1 { (e, v) } else { best })
            .0
    }
}

fn clamp_energy(value: i64) -> u8 {
    value.clamp(i64::from(ELEMENT_MIN), i64::from(ELEMENT_MAX)) as u8
}

impl Serialize for ElementsVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (element, value) in self.iter() {
            map.serialize_entry(element.label(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ElementsVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<Element, f64>::deserialize(deserializer)?;
        Ok(Self::from_entries(
            raw.into_iter().map(|(e, v)| (e, v.trunc() as i64)),
        ))
    }
}

/// Mapper from constitution scores to element energies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementsMapper {
    policy: ElementsPolicy,
}

impl ElementsMapper {
    /// Creates a mapper using the given policy.
    pub fn new(policy: ElementsPolicy) -> Self {
        Self { policy }
    }

    /// Returns the active policy.
    pub fn policy(&self) -> ElementsPolicy {
        self.policy
    }

    /// Maps scores to element energies. Never fails.
    pub fn map(&self, scores: &ConstitutionScores) -> ElementsVector {
        let scaled = match self.policy {
            ElementsPolicy::Linear => Self::linear(scores),
            ElementsPolicy::Enhanced => Self::enhanced(scores),
        };
        // truncate toward zero, then clamp
        ElementsVector::from_entries(
            Element::all()
                .iter()
                .map(|e| (*e, scaled[e.index()].trunc() as i64)),
        )
    }

    fn linear(scores: &ConstitutionScores) -> [f64; 5] {
        let input = scores.to_array().map(|v| v / 100.0);
        multiply(&LINEAR_WEIGHTS, &input).map(|raw| raw * 60.0 + 20.0)
    }

    fn enhanced(scores: &ConstitutionScores) -> [f64; 5] {
        let mut input = [0.0; 9];
        for (constitution, value) in scores.iter() {
            let kept = if constitution.is_baseline() || value > ENHANCED_SCORE_THRESHOLD {
                value
            } else {
                0.0
            };
            input[constitution.index()] = kept / 100.0;
        }

        let powered = multiply(&ENHANCED_WEIGHTS, &input).map(|raw| raw.powf(ENHANCED_EXPONENT));

        let max = powered.iter().copied().fold(f64::MIN, f64::max);
        if max == 0.0 {
            return powered.map(|p| p + ENHANCED_FLOOR);
        }

        let min = powered.iter().copied().fold(f64::MAX, f64::min);
        let spread = max - min;
        let ratio = if spread == 0.0 {
            1.0
        } else {
            (ENHANCED_CEILING - ENHANCED_FLOOR) / spread
        };
        powered.map(|p| (p - min) * ratio + ENHANCED_FLOOR)
    }
}

fn multiply(weights: &[[f64; 9]; 5], input: &[f64; 9]) -> [f64; 5] {
    weights.map(|row| row.iter().zip(input).map(|(w, x)| w * x).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Constitution;

    fn scores(entries: &[(Constitution, f64)]) -> ConstitutionScores {
        ConstitutionScores::from_entries(entries.iter().copied())
    }

    #[test]
    fn enhanced_all_zero_is_flat_twenty() {
        let out = ElementsMapper::default().map(&ConstitutionScores::ZERO);
        assert!(out.iter().all(|(_, v)| v == 20));
    }

    #[test]
    fn enhanced_baseline_only_is_flat_twenty() {
        // Baseline column is uniform, so every element gets the same energy
        let out = ElementsMapper::default().map(&scores(&[(Constitution::Balanced, 100.0)]));
        assert!(out.iter().all(|(_, v)| v == 20));
    }

    #[test]
    fn enhanced_thresholds_mild_scores() {
        let mild = scores(&[(Constitution::QiStagnation, 50.0)]);
        let out = ElementsMapper::default().map(&mild);
        assert!(out.iter().all(|(_, v)| v == 20));
    }

    #[test]
    fn enhanced_stretches_dominant_element() {
        let out = ElementsMapper::default().map(&scores(&[(Constitution::QiStagnation, 90.0)]));
        // 气郁 weighs 0.9 on wood, the largest weight in its column
        assert_eq!(out.strongest(), Element::Wood);
        assert!(out.get(Element::Wood) >= 94);
        // 金 shares the minimum weight (0.1) with 土 and 水
        assert_eq!(out.get(Element::Metal), 20);
    }

    #[test]
    fn enhanced_earth_for_phlegm_and_qi() {
        let out = ElementsMapper::default().map(&scores(&[
            (Constitution::PhlegmDampness, 80.0),
            (Constitution::QiDeficiency, 70.0),
        ]));
        assert_eq!(out.strongest(), Element::Earth);
    }

    #[test]
    fn linear_zero_scores_floor_at_twenty() {
        let out = ElementsMapper::new(ElementsPolicy::Linear).map(&ConstitutionScores::ZERO);
        assert!(out.iter().all(|(_, v)| v == 20));
    }

    #[test]
    fn linear_all_hundred_clamps_to_ceiling() {
        let out = ElementsMapper::new(ElementsPolicy::Linear)
            .map(&ConstitutionScores::from_array([100.0; 9]));
        // fire row sums to 3.0 -> 200, clamped
        assert_eq!(out.get(Element::Fire), ELEMENT_MAX);
    }

    #[test]
    fn linear_truncates_toward_zero() {
        // wood: 0.9 * 0.5 = 0.45 -> 47.0; water: 0.1 * 0.5 = 0.05 -> 23.0
        let out = ElementsMapper::new(ElementsPolicy::Linear)
            .map(&scores(&[(Constitution::QiStagnation, 50.0)]));
        assert_eq!(out.get(Element::Wood), 47);
        assert_eq!(out.get(Element::Water), 23);
    }

    #[test]
    fn mapper_is_deterministic() {
        let input = scores(&[
            (Constitution::Balanced, 62.5),
            (Constitution::YinDeficiency, 71.43),
            (Constitution::DampHeat, 53.57),
        ]);
        let mapper = ElementsMapper::default();
        assert_eq!(mapper.map(&input), mapper.map(&input));
    }

    #[test]
    fn elements_vector_clamps_entries() {
        let v = ElementsVector::from_entries([(Element::Fire, 3), (Element::Water, 120)]);
        assert_eq!(v.get(Element::Fire), ELEMENT_MIN);
        assert_eq!(v.get(Element::Water), ELEMENT_MAX);
        assert_eq!(v.get(Element::Wood), ELEMENT_MIN);
    }

    #[test]
    fn elements_vector_serde_uses_labels() {
        let v = ElementsVector::from_entries([
            (Element::Wood, 40),
            (Element::Fire, 30),
            (Element::Earth, 80),
            (Element::Metal, 60),
            (Element::Water, 40),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"木":40,"火":30,"土":80,"金":60,"水":40}"#);
        let back: ElementsVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn policy_parses_lowercase() {
        let p: ElementsPolicy = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(p, ElementsPolicy::Linear);
        assert_eq!(ElementsPolicy::default(), ElementsPolicy::Enhanced);
    }
}
