//! Constitution enum representing the 9 standardized body constitutions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::ValidationError;

/// Number of questionnaire items.
pub const QUESTION_COUNT: usize = 67;

/// The 9 constitutions: the balanced baseline plus 8 pathological patterns.
///
/// Serialized by their Chinese labels, which is also how question banks,
/// payloads and the research log name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Constitution {
    #[serde(rename = "平和质")]
    Balanced,
    #[serde(rename = "气虚质")]
    QiDeficiency,
    #[serde(rename = "阳虚质")]
    YangDeficiency,
    #[serde(rename = "阴虚质")]
    YinDeficiency,
    #[serde(rename = "痰湿质")]
    PhlegmDampness,
    #[serde(rename = "湿热质")]
    DampHeat,
    #[serde(rename = "血瘀质")]
    BloodStasis,
    #[serde(rename = "气郁质")]
    QiStagnation,
    #[serde(rename = "特禀质")]
    Inherited,
}

impl Constitution {
    /// The baseline constitution.
    pub const BASELINE: Constitution = Constitution::Balanced;

    /// Returns all constitutions in canonical order (baseline first).
    ///
    /// Used for score vectors, classifier features and the elements matrix.
    pub fn all() -> &'static [Constitution; 9] {
        &[
            Constitution::Balanced,
            Constitution::QiDeficiency,
            Constitution::YangDeficiency,
            Constitution::YinDeficiency,
            Constitution::PhlegmDampness,
            Constitution::DampHeat,
            Constitution::BloodStasis,
            Constitution::QiStagnation,
            Constitution::Inherited,
        ]
    }

    /// Returns all constitutions in questionnaire order.
    ///
    /// This is the order the answer slices appear in, and the order ties are
    /// broken in when picking a dominant constitution.
    pub fn questionnaire_order() -> &'static [Constitution; 9] {
        &[
            Constitution::YangDeficiency,
            Constitution::YinDeficiency,
            Constitution::QiDeficiency,
            Constitution::PhlegmDampness,
            Constitution::DampHeat,
            Constitution::BloodStasis,
            Constitution::QiStagnation,
            Constitution::Inherited,
            Constitution::Balanced,
        ]
    }

    /// Returns the 0-based index of this constitution in canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns true for the balanced baseline.
    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }

    /// Returns the slice of the 67-item answer vector covered by this constitution.
    pub fn answer_range(&self) -> Range<usize> {
        match self {
            Constitution::YangDeficiency => 0..7,
            Constitution::YinDeficiency => 7..15,
            Constitution::QiDeficiency => 15..23,
            Constitution::PhlegmDampness => 23..31,
            Constitution::DampHeat => 31..38,
            Constitution::BloodStasis => 38..45,
            Constitution::QiStagnation => 45..52,
            Constitution::Inherited => 52..59,
            Constitution::Balanced => 59..67,
        }
    }

    /// Returns the constitution whose slice contains the given item position.
    pub fn at_position(position: usize) -> Option<Constitution> {
        Self::questionnaire_order()
            .iter()
            .copied()
            .find(|c| c.answer_range().contains(&position))
    }

    /// Returns the Chinese label.
    pub fn label(&self) -> &'static str {
        match self {
            Constitution::Balanced => "平和质",
            Constitution::QiDeficiency => "气虚质",
            Constitution::YangDeficiency => "阳虚质",
            Constitution::YinDeficiency => "阴虚质",
            Constitution::PhlegmDampness => "痰湿质",
            Constitution::DampHeat => "湿热质",
            Constitution::BloodStasis => "血瘀质",
            Constitution::QiStagnation => "气郁质",
            Constitution::Inherited => "特禀质",
        }
    }

    /// Returns the pinyin key used in research log column names.
    pub fn pinyin(&self) -> &'static str {
        match self {
            Constitution::Balanced => "pinghe",
            Constitution::QiDeficiency => "qixu",
            Constitution::YangDeficiency => "yangxu",
            Constitution::YinDeficiency => "yinxu",
            Constitution::PhlegmDampness => "tanshi",
            Constitution::DampHeat => "shire",
            Constitution::BloodStasis => "xueyu",
            Constitution::QiStagnation => "qiyu",
            Constitution::Inherited => "tebing",
        }
    }

    /// Parses a Chinese label.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label() == label.trim())
            .ok_or_else(|| ValidationError::unknown_label("constitution", label))
    }
}

impl FromStr for Constitution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
