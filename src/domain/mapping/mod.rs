//! Mapping Module - Constitution scores to personality and five elements.
//!
//! # Components
//!
//! - `ElementsMapper` - Weighted projection onto the five elements
//! - `PersonalityNetwork` - Feed-forward network loaded from a `ModelArtifact`
//! - `PersonalityClassifier` - Lazily loaded network with a rule-based fallback
//! - `MappingFacade` - Runs both mappings for one submission

mod classifier;
mod elements;
mod facade;
mod fallback;
mod features;
mod network;

pub use classifier::{ModelState, PersonalityClassifier, PersonalityPrediction, PersonalitySource};
pub use elements::{
    ElementsMapper, ElementsPolicy, ElementsVector, ELEMENT_MAX, ELEMENT_MIN, ENHANCED_WEIGHTS,
    LINEAR_WEIGHTS,
};
pub use facade::{MappingFacade, MappingResult};
pub use fallback::{fallback_label, label_for, EMPTY_SCORES_LABEL};
pub use features::{build_features, FEATURE_COUNT};
pub use network::{InferenceError, ModelArtifact, PersonalityNetwork, StoredLayer};
