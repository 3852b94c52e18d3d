//! Model Artifact Adapters
//!
//! - **FsModelArtifactSource** - JSON artifact on disk with optional SHA-256 check
//! - **StaticModelArtifactSource** - Artifact held in memory (testing/development)

mod fs_artifact_source;
mod static_artifact_source;

pub use fs_artifact_source::FsModelArtifactSource;
pub use static_artifact_source::StaticModelArtifactSource;
