//! Question bank: the ordered, validated list of questionnaire items.

use serde::{Deserialize, Serialize};

use super::{Constitution, DomainError, Polarity, QUESTION_COUNT};

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub text: String,
    pub category: Constitution,
    pub polarity: Polarity,
}

impl QuestionItem {
    /// Creates a positively scored item.
    pub fn new(text: impl Into<String>, category: Constitution) -> Self {
        Self {
            text: text.into(),
            category,
            polarity: Polarity::Positive,
        }
    }

    /// Sets the item's polarity.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

/// The 67 questionnaire items in answer order.
///
/// Item categories must follow the fixed questionnaire layout
/// (`Constitution::answer_range`), since the classifier reorders answers by
/// that layout rather than by the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    items: Vec<QuestionItem>,
}

impl QuestionBank {
    /// Validates and wraps a list of items.
    ///
    /// # Errors
    ///
    /// `QuestionBankInvalid` if there are not exactly 67 items or an item's
    /// category disagrees with the questionnaire layout.
    pub fn new(items: Vec<QuestionItem>) -> Result<Self, DomainError> {
        if items.len() != QUESTION_COUNT {
            return Err(DomainError::question_bank(format!(
                "expected {} questions, found {}",
                QUESTION_COUNT,
                items.len()
            ))
            .with_detail("count", items.len().to_string()));
        }

        for (position, item) in items.iter().enumerate() {
            // at_position is total over 0..67
            let expected = Constitution::at_position(position);
            if expected != Some(item.category) {
                return Err(DomainError::question_bank(format!(
                    "question {} is labelled {} but the layout expects {}",
                    position + 1,
                    item.category,
                    expected.map(|c| c.label()).unwrap_or("-")
                ))
                .with_detail("position", (position + 1).to_string()));
            }
        }

        Ok(Self { items })
    }

    /// A bank with positional placeholder texts and all-positive polarity.
    ///
    /// Used when no question bank file is configured.
    pub fn positive_layout() -> Self {
        let items = (0..QUESTION_COUNT)
            .filter_map(|i| {
                Constitution::at_position(i)
                    .map(|c| QuestionItem::new(format!("Item {}", i + 1), c))
            })
            .collect();
        Self { items }
    }

    /// Returns the items in answer order.
    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    /// Returns the number of items (always 67).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a validated bank.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counts reverse-scored items.
    pub fn negative_count(&self) -> usize {
        self.items
            .iter()
            .filter(|q| q.polarity == Polarity::Negative)
            .count()
    }
}
