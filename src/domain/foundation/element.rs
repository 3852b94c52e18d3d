//! Element enum for the five energetic categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// The five elements, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// Returns all elements in fixed order.
    pub fn all() -> &'static [Element; 5] {
        &[
            Element::Wood,
            Element::Fire,
            Element::Earth,
            Element::Metal,
            Element::Water,
        ]
    }

    /// Returns the 0-based index of this element.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the Chinese label.
    pub fn label(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Returns the organ system associated with this element.
    pub fn organ(&self) -> &'static str {
        match self {
            Element::Wood => "liver",
            Element::Fire => "heart",
            Element::Earth => "spleen",
            Element::Metal => "lung",
            Element::Water => "kidney",
        }
    }

    /// Parses a Chinese label.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|e| e.label() == label.trim())
            .ok_or_else(|| ValidationError::unknown_label("element", label))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
