//! Filesystem adapter for the personality model artifact
//!
//! Reads a JSON artifact from disk, optionally verifying its SHA-256 digest
//! before parsing.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::mapping::ModelArtifact;
use crate::ports::{ArtifactError, ModelArtifactSource};

/// Model artifact stored as a JSON file
#[derive(Debug, Clone)]
pub struct FsModelArtifactSource {
    path: PathBuf,
    sha256: Option<String>,
}

impl FsModelArtifactSource {
    /// Create a source reading from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sha256: None,
        }
    }

    /// Require the file's SHA-256 to match `digest` (hex, case-insensitive)
    pub fn with_checksum(mut self, digest: impl Into<String>) -> Self {
        self.sha256 = Some(digest.into().to_ascii_lowercase());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compute the hex SHA-256 of some bytes
    pub fn compute_checksum(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }
}

impl ModelArtifactSource for FsModelArtifactSource {
    fn load(&self) -> Result<ModelArtifact, ArtifactError> {
        if !self.path.exists() {
            return Err(ArtifactError::NotFound(self.path.display().to_string()));
        }

        let bytes = fs::read(&self.path)
            .map_err(|e| ArtifactError::IoError(format!("Failed to read artifact: {}", e)))?;

        if let Some(expected) = &self.sha256 {
            let actual = Self::compute_checksum(&bytes);
            if &actual != expected {
                return Err(ArtifactError::ChecksumMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Corrupt(e.to_string()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
