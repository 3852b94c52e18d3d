//! ResearchLog port for persisting consenting submissions.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::ResearchRecord;

/// Errors that can occur while appending to the research log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Permission denied
    PermissionDenied(String),
    /// IO error
    IoError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Append-only store for research records
pub trait ResearchLog: Send + Sync {
    /// Append one record
    fn append(&self, record: &ResearchRecord) -> Result<(), StorageError>;

    /// Number of records stored so far
    fn count(&self) -> Result<usize, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_maps_to_storage_code() {
        let err: DomainError = StorageError::PermissionDenied("research_data.csv".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(
            err.to_string(),
            "[STORAGE_ERROR] Permission denied: research_data.csv"
        );
    }
}
