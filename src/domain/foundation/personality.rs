//! PersonalityType: the 16 four-letter personality codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the 16 four-letter personality codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl PersonalityType {
    /// Returns all 16 codes.
    pub fn all() -> &'static [PersonalityType; 16] {
        use PersonalityType::*;
        &[
            Istj, Isfj, Infj, Intj, Istp, Isfp, Infp, Intp, Estp, Esfp, Enfp, Entp, Estj, Esfj,
            Enfj, Entj,
        ]
    }

    /// Returns the four-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            PersonalityType::Istj => "ISTJ",
            PersonalityType::Isfj => "ISFJ",
            PersonalityType::Infj => "INFJ",
            PersonalityType::Intj => "INTJ",
            PersonalityType::Istp => "ISTP",
            PersonalityType::Isfp => "ISFP",
            PersonalityType::Infp => "INFP",
            PersonalityType::Intp => "INTP",
            PersonalityType::Estp => "ESTP",
            PersonalityType::Esfp => "ESFP",
            PersonalityType::Enfp => "ENFP",
            PersonalityType::Entp => "ENTP",
            PersonalityType::Estj => "ESTJ",
            PersonalityType::Esfj => "ESFJ",
            PersonalityType::Enfj => "ENFJ",
            PersonalityType::Entj => "ENTJ",
        }
    }

    /// Returns true for the extraverted half of the codes.
    pub fn is_extraverted(&self) -> bool {
        self.code().starts_with('E')
    }
}

impl FromStr for PersonalityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.code() == wanted)
            .ok_or_else(|| ValidationError::unknown_label("personality", s))
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
