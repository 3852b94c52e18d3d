//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// File locations for the question bank and the research log
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Question bank file (YAML or JSON); the built-in layout is used when unset
    pub question_bank_path: Option<PathBuf>,

    /// Research log CSV file
    #[serde(default = "default_research_log_path")]
    pub research_log_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.research_log_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.research_log_path"));
        }
        if matches!(&self.question_bank_path, Some(p) if p.as_os_str().is_empty()) {
            return Err(ValidationError::MissingRequired("storage.question_bank_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            question_bank_path: None,
            research_log_path: default_research_log_path(),
        }
    }
}

fn default_research_log_path() -> PathBuf {
    PathBuf::from("research_data.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.research_log_path, PathBuf::from("research_data.csv"));
        assert!(config.question_bank_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_bank_path_rejected() {
        let config = StorageConfig {
            question_bank_path: Some(PathBuf::new()),
            research_log_path: default_research_log_path(),
        };
        assert!(config.validate().is_err());
    }
}
