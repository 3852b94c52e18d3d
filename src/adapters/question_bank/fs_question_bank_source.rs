//! Filesystem adapter for the question bank
//!
//! Reads a list of `{question, type, direction}` records from a YAML or JSON
//! file (chosen by extension; anything but `.json` is parsed as YAML).
//! A missing `direction` means the item is scored positively.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::{Constitution, DomainError, Polarity, QuestionBank, QuestionItem};
use crate::ports::QuestionBankSource;

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    #[serde(rename = "type")]
    category: String,
    #[serde(default = "default_direction")]
    direction: i8,
}

fn default_direction() -> i8 {
    1
}

/// Question bank stored as a YAML or JSON file
#[derive(Debug, Clone)]
pub struct FsQuestionBankSource {
    path: PathBuf,
}

impl FsQuestionBankSource {
    /// Create a source reading from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    fn parse_records(&self, content: &str) -> Result<Vec<QuestionRecord>, DomainError> {
        if self.is_json() {
            serde_json::from_str(content)
                .map_err(|e| DomainError::question_bank(format!("Invalid JSON question bank: {}", e)))
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| DomainError::question_bank(format!("Invalid YAML question bank: {}", e)))
        }
    }
}

impl QuestionBankSource for FsQuestionBankSource {
    fn load(&self) -> Result<QuestionBank, DomainError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::question_bank(format!("Failed to read question bank: {}", e))
                .with_detail("path", self.path.display().to_string())
        })?;

        let items = self
            .parse_records(&content)?
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let category = Constitution::from_label(&record.category).map_err(|e| {
                    DomainError::question_bank(e.to_string()).with_detail("item", (i + 1).to_string())
                })?;
                let polarity = Polarity::try_from(record.direction).map_err(|e| {
                    DomainError::question_bank(e.to_string()).with_detail("item", (i + 1).to_string())
                })?;
                Ok(QuestionItem::new(record.question, category).with_polarity(polarity))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let bank = QuestionBank::new(items)?;
        tracing::debug!(
            path = %self.path.display(),
            negative = bank.negative_count(),
            "Question bank loaded"
        );
        Ok(bank)
    }
}
