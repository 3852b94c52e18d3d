//! In-memory model artifact source
//!
//! Serves a fixed artifact (or a fixed absence) and counts load calls.
//! Useful for testing and development.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::mapping::ModelArtifact;
use crate::ports::{ArtifactError, ModelArtifactSource};

/// Artifact source backed by a value held in memory
#[derive(Debug, Default)]
pub struct StaticModelArtifactSource {
    artifact: Option<ModelArtifact>,
    loads: AtomicUsize,
}

impl StaticModelArtifactSource {
    /// Create a source that always yields `artifact`
    pub fn new(artifact: ModelArtifact) -> Self {
        Self {
            artifact: Some(artifact),
            loads: AtomicUsize::new(0),
        }
    }

    /// Create a source that always reports the artifact as missing
    pub fn missing() -> Self {
        Self::default()
    }

    /// Number of times `load` has been called
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelArtifactSource for StaticModelArtifactSource {
    fn load(&self) -> Result<ModelArtifact, ArtifactError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.artifact
            .clone()
            .ok_or_else(|| ArtifactError::NotFound("in-memory artifact".to_string()))
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
