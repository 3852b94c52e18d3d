//! ModelArtifactSource port for loading the pre-trained personality network.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::mapping::ModelArtifact;

/// Errors that can occur while fetching a model artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    /// Artifact not found
    NotFound(String),
    /// Artifact present but unreadable or malformed
    Corrupt(String),
    /// Artifact bytes do not match the configured digest
    ChecksumMismatch { expected: String, actual: String },
    /// IO error
    IoError(String),
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Model artifact not found: {}", msg),
            Self::Corrupt(msg) => write!(f, "Model artifact corrupt: {}", msg),
            Self::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "Checksum mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ArtifactError {}

impl From<ArtifactError> for DomainError {
    fn from(err: ArtifactError) -> Self {
        DomainError::new(ErrorCode::ResourceUnavailable, err.to_string())
    }
}

/// Source of the personality network's weights.
///
/// Called at most once per classifier; absence is not fatal to callers.
pub trait ModelArtifactSource: Send + Sync {
    /// Load the artifact.
    fn load(&self) -> Result<ModelArtifact, ArtifactError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
