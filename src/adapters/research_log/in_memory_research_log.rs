//! In-Memory Research Log Adapter
//!
//! Keeps appended records in memory.
//! Useful for testing and development.

use std::sync::{Arc, RwLock};

use crate::domain::report::ResearchRecord;
use crate::ports::{ResearchLog, StorageError};

/// In-memory research log
#[derive(Debug, Clone, Default)]
pub struct InMemoryResearchLog {
    records: Arc<RwLock<Vec<ResearchRecord>>>,
}

impl InMemoryResearchLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all appended records
    pub fn records(&self) -> Vec<ResearchRecord> {
        self.records
            .read()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl ResearchLog for InMemoryResearchLog {
    fn append(&self, record: &ResearchRecord) -> Result<(), StorageError> {
        self.records
            .write()
            .map_err(|_| StorageError::IoError("Research log lock poisoned".to_string()))?
            .push(record.clone());
        Ok(())
    }

    fn count(&self) -> Result<usize, StorageError> {
        self.records
            .read()
            .map(|records| records.len())
            .map_err(|_| StorageError::IoError("Research log lock poisoned".to_string()))
    }
}
