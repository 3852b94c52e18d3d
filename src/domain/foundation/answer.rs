//! Answer value objects: single Likert responses and the full 67-item set.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Constitution, ValidationError, QUESTION_COUNT};

/// Likert response: 1 (never) to 5 (always).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Answer(u8);

impl Answer {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates an Answer, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "answer",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value after applying item polarity (`6 - v` when reversed).
    pub fn adjusted(&self, polarity: Polarity) -> u8 {
        match polarity {
            Polarity::Positive => self.0,
            Polarity::Negative => 6 - self.0,
        }
    }

    /// Returns the display caption.
    pub fn caption(&self) -> &'static str {
        match self.0 {
            1 => "没有",
            2 => "很少",
            3 => "有时",
            4 => "经常",
            _ => "总是",
        }
    }
}

impl TryFrom<u8> for Answer {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Answer> for u8 {
    fn from(answer: Answer) -> Self {
        answer.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scoring direction of a question item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

impl Polarity {
    /// Returns the signed direction (+1 or -1).
    pub fn sign(&self) -> i8 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Polarity::Positive),
            -1 => Ok(Polarity::Negative),
            other => Err(ValidationError::invalid_format(
                "direction",
                format!("expected 1 or -1, got {}", other),
            )),
        }
    }
}

impl From<Polarity> for i8 {
    fn from(polarity: Polarity) -> Self {
        polarity.sign()
    }
}

/// The 67 responses of one questionnaire, aligned to question bank order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct AnswerSet(Vec<Answer>);

impl AnswerSet {
    /// Creates an AnswerSet from raw values, validating length and range.
    pub fn from_values(values: &[u8]) -> Result<Self, ValidationError> {
        if values.len() != QUESTION_COUNT {
            return Err(ValidationError::length_mismatch(
                "answers",
                QUESTION_COUNT,
                values.len(),
            ));
        }
        let answers = values
            .iter()
            .map(|v| Answer::try_new(*v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(answers))
    }

    /// Creates an AnswerSet with every item set to the same value.
    pub fn uniform(value: u8) -> Result<Self, ValidationError> {
        Self::from_values(&[value; QUESTION_COUNT])
    }

    /// Parses a 67-character digit string such as `"1234512345..."`.
    pub fn from_digits(digits: &str) -> Result<Self, ValidationError> {
        let digits = digits.trim();
        let values = digits
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| {
                        ValidationError::invalid_format(
                            "answers",
                            format!("'{}' is not a digit", c),
                        )
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(&values)
    }

    /// Renders the answers as a compact digit string.
    pub fn to_digits(&self) -> String {
        self.0.iter().map(|a| a.to_string()).collect()
    }

    /// Generates a random questionnaire that leans towards one constitution.
    ///
    /// Every item is 1-2 with probability 0.8 and 3 otherwise; the items of
    /// one randomly chosen constitution are then overwritten with 4-5.
    pub fn random_profile<R: Rng>(rng: &mut R) -> (Constitution, Self) {
        let mut values: Vec<u8> = (0..QUESTION_COUNT)
            .map(|_| {
                if rng.gen_bool(0.8) {
                    rng.gen_range(1..=2)
                } else {
                    3
                }
            })
            .collect();

        let target = Constitution::questionnaire_order()[rng.gen_range(0..9)];
        for i in target.answer_range() {
            values[i] = rng.gen_range(4..=5);
        }

        let answers = values.into_iter().map(Answer).collect();
        (target, Self(answers))
    }

    /// Returns the answers in bank order.
    pub fn answers(&self) -> &[Answer] {
        &self.0
    }

    /// Returns the answers of one constitution's questionnaire slice.
    pub fn slice_of(&self, constitution: Constitution) -> &[Answer] {
        &self.0[constitution.answer_range()]
    }

    /// Returns the number of answers (always 67).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<u8>> for AnswerSet {
    type Error = ValidationError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

impl From<AnswerSet> for Vec<u8> {
    fn from(set: AnswerSet) -> Self {
        set.0.into_iter().map(u8::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn answer_try_new_accepts_valid_values() {
        for v in 1..=5 {
            assert_eq!(Answer::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn answer_try_new_rejects_out_of_range() {
        assert!(Answer::try_new(0).is_err());
        assert!(Answer::try_new(6).is_err());
    }

    #[test]
    fn answer_adjusted_reverses_negative_items() {
        let a = Answer::try_new(2).unwrap();
        assert_eq!(a.adjusted(Polarity::Positive), 2);
        assert_eq!(a.adjusted(Polarity::Negative), 4);
    }

    #[test]
    fn answer_caption_covers_scale() {
        assert_eq!(Answer::try_new(1).unwrap().caption(), "没有");
        assert_eq!(Answer::try_new(5).unwrap().caption(), "总是");
    }

    #[test]
    fn polarity_parses_signed_direction() {
        assert_eq!(Polarity::try_from(1).unwrap(), Polarity::Positive);
        assert_eq!(Polarity::try_from(-1).unwrap(), Polarity::Negative);
        assert!(Polarity::try_from(0).is_err());
    }

    #[test]
    fn answer_set_rejects_wrong_length() {
        let err = AnswerSet::from_values(&[3; 66]).unwrap_err();
        assert_eq!(err, ValidationError::length_mismatch("answers", 67, 66));
    }

    #[test]
    fn answer_set_rejects_out_of_range_value() {
        let mut values = [3u8; QUESTION_COUNT];
        values[10] = 9;
        assert!(matches!(
            AnswerSet::from_values(&values),
            Err(ValidationError::OutOfRange { actual: 9, .. })
        ));
    }

    #[test]
    fn answer_set_digits_round_trip() {
        let digits: String = (0..QUESTION_COUNT).map(|i| char::from(b'1' + (i % 5) as u8)).collect();
        let set = AnswerSet::from_digits(&digits).unwrap();
        assert_eq!(set.to_digits(), digits);
    }

    #[test]
    fn answer_set_from_digits_rejects_letters() {
        let digits = format!("{}x", "1".repeat(66));
        assert!(matches!(
            AnswerSet::from_digits(&digits),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn answer_set_slice_of_uses_layout() {
        let mut values = [1u8; QUESTION_COUNT];
        for v in &mut values[59..67] {
            *v = 5;
        }
        let set = AnswerSet::from_values(&values).unwrap();
        assert!(set.slice_of(Constitution::Balanced).iter().all(|a| a.value() == 5));
        assert!(set.slice_of(Constitution::YangDeficiency).iter().all(|a| a.value() == 1));
        assert_eq!(set.slice_of(Constitution::DampHeat).len(), 7);
    }

    #[test]
    fn random_profile_concentrates_on_target() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (target, set) = AnswerSet::random_profile(&mut rng);
            assert_eq!(set.len(), QUESTION_COUNT);
            assert!(set.slice_of(target).iter().all(|a| a.value() >= 4));
            for (i, a) in set.answers().iter().enumerate() {
                if !target.answer_range().contains(&i) {
                    assert!(a.value() <= 3);
                }
            }
        }
    }

    #[test]
    fn answer_set_serializes_as_array() {
        let set = AnswerSet::uniform(2).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
        assert!(serde_json::from_str::<AnswerSet>("[1,2,3]").is_err());
    }
}
