//! Personality Classifier - network inference with a rule-based fallback.
//!
//! The network is loaded on first use, exactly once. A failed load is final
//! for the classifier's lifetime and every later call uses the fallback
//! table. Callers never see an error.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::{AnswerSet, DomainError, PersonalityType};
use crate::domain::scoring::ConstitutionScores;
use crate::ports::ModelArtifactSource;

use super::fallback::fallback_label;
use super::features::build_features;
use super::network::PersonalityNetwork;

/// Where a personality label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalitySource {
    Model,
    Fallback,
}

/// A personality label plus its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityPrediction {
    pub personality: PersonalityType,
    pub source: PersonalitySource,
}

impl PersonalityPrediction {
    fn fallback(scores: &ConstitutionScores) -> Self {
        Self {
            personality: fallback_label(scores.iter_questionnaire()),
            source: PersonalitySource::Fallback,
        }
    }
}

/// Load state of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unloaded,
    Loaded,
    LoadFailed,
}

/// Classifier from (scores, answers) to a personality label.
pub struct PersonalityClassifier {
    source: Option<Arc<dyn ModelArtifactSource>>,
    network: OnceCell<Option<Arc<PersonalityNetwork>>>,
}

impl PersonalityClassifier {
    /// Creates a classifier that loads its network from `source` on first use.
    pub fn new(source: Arc<dyn ModelArtifactSource>) -> Self {
        Self {
            source: Some(source),
            network: OnceCell::new(),
        }
    }

    /// Creates a classifier that always uses the fallback table.
    pub fn fallback_only() -> Self {
        Self {
            source: None,
            network: OnceCell::new(),
        }
    }

    /// Reports the current load state without triggering a load.
    pub fn state(&self) -> ModelState {
        match self.network.get() {
            None => ModelState::Unloaded,
            Some(Some(_)) => ModelState::Loaded,
            Some(None) => ModelState::LoadFailed,
        }
    }

    /// Forces the one-time load and reports whether the network is usable.
    pub fn warm_up(&self) -> bool {
        self.network().is_some()
    }

    /// Predicts a personality label. Never fails.
    pub fn classify(&self, scores: &ConstitutionScores, answers: &AnswerSet) -> PersonalityPrediction {
        let Some(network) = self.network() else {
            return PersonalityPrediction::fallback(scores);
        };

        match network.predict(&build_features(answers, scores)) {
            Ok(personality) => PersonalityPrediction {
                personality,
                source: PersonalitySource::Model,
            },
            Err(e) => {
                tracing::warn!("Personality inference failed, using fallback: {}", e);
                PersonalityPrediction::fallback(scores)
            }
        }
    }

    fn network(&self) -> Option<&Arc<PersonalityNetwork>> {
        self.network
            .get_or_init(|| {
                let source = self.source.as_ref()?;
                let loaded = source
                    .load()
                    .and_then(PersonalityNetwork::from_artifact);
                match loaded {
                    Ok(network) => {
                        tracing::info!(source = %source.describe(), "Personality model loaded");
                        Some(Arc::new(network))
                    }
                    Err(e) => {
                        let err = DomainError::from(e);
                        tracing::warn!(
                            source = %source.describe(),
                            code = %err.code,
                            "Personality model unavailable, using fallback: {}",
                            err.message
                        );
                        None
                    }
                }
            })
            .as_ref()
    }
}

impl fmt::Debug for PersonalityClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalityClassifier")
            .field("source", &self.source.as_ref().map(|s| s.describe()))
            .field("state", &self.state())
            .finish()
    }
}
