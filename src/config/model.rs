//! Personality model configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Artifact path used when nothing is configured
pub const DEFAULT_MODEL_PATH: &str = "best_mbti_model.json";

/// Personality model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path of the JSON model artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Expected SHA-256 of the artifact file (hex)
    pub sha256: Option<String>,
}

impl ModelConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.artifact_path"));
        }
        if let Some(digest) = &self.sha256 {
            if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ValidationError::InvalidChecksum);
            }
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
            sha256: None,
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}
