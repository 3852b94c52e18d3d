//! Feed-forward personality network: `76 -> ReLU 32 -> ReLU 8 -> 16`.
//!
//! Weights come from a pre-trained [`ModelArtifact`]; nothing here trains.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::PersonalityType;
use crate::ports::ArtifactError;

use super::features::FEATURE_COUNT;

/// Width of the first hidden layer.
pub const HIDDEN_1: usize = 32;

/// Width of the second hidden layer.
pub const HIDDEN_2: usize = 8;

/// Number of output classes.
pub const OUTPUT_CLASSES: usize = 16;

/// A serialized dense layer. `weight` is row-major with `rows` outputs and
/// `cols` inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLayer {
    pub rows: usize,
    pub cols: usize,
    pub weight: Vec<f32>,
    pub bias: Vec<f32>,
}

/// On-disk model: three dense layers plus the class index -> label table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub fc1: StoredLayer,
    pub fc2: StoredLayer,
    pub fc4: StoredLayer,
    pub labels: Vec<String>,
}

/// Errors raised during a forward pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("non-finite activation in layer {layer}")]
    NonFinite { layer: &'static str },
}

#[derive(Debug, Clone)]
struct Dense {
    name: &'static str,
    rows: usize,
    cols: usize,
    weight: Vec<f32>,
    bias: Vec<f32>,
}

impl Dense {
    fn from_stored(
        name: &'static str,
        stored: StoredLayer,
        rows: usize,
        cols: usize,
    ) -> Result<Self, ArtifactError> {
        if stored.rows != rows || stored.cols != cols {
            return Err(ArtifactError::Corrupt(format!(
                "{} has shape {}x{}, expected {}x{}",
                name, stored.rows, stored.cols, rows, cols
            )));
        }
        if stored.weight.len() != rows * cols || stored.bias.len() != rows {
            return Err(ArtifactError::Corrupt(format!(
                "{} holds {} weights and {} biases for shape {}x{}",
                name,
                stored.weight.len(),
                stored.bias.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            name,
            rows,
            cols,
            weight: stored.weight,
            bias: stored.bias,
        })
    }

    fn forward(&self, input: &[f32], relu: bool) -> Result<Vec<f32>, InferenceError> {
        let out: Vec<f32> = self
            .weight
            .chunks_exact(self.cols)
            .zip(&self.bias)
            .map(|(row, b)| {
                let z = b + row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>();
                if relu {
                    z.max(0.0)
                } else {
                    z
                }
            })
            .collect();
        debug_assert_eq!(out.len(), self.rows);

        if out.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { layer: self.name });
        }
        Ok(out)
    }
}

/// A validated, ready-to-run network.
#[derive(Debug, Clone)]
pub struct PersonalityNetwork {
    fc1: Dense,
    fc2: Dense,
    fc4: Dense,
    labels: [PersonalityType; OUTPUT_CLASSES],
}

impl PersonalityNetwork {
    /// Validates layer shapes and the label table.
    ///
    /// # Errors
    ///
    /// `ArtifactError::Corrupt` on any shape mismatch, a label table that is
    /// not exactly 16 known codes, or non-finite parameters.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        let fc1 = Dense::from_stored("fc1", artifact.fc1, HIDDEN_1, FEATURE_COUNT)?;
        let fc2 = Dense::from_stored("fc2", artifact.fc2, HIDDEN_2, HIDDEN_1)?;
        let fc4 = Dense::from_stored("fc4", artifact.fc4, OUTPUT_CLASSES, HIDDEN_2)?;

        for layer in [&fc1, &fc2, &fc4] {
            if layer.weight.iter().chain(&layer.bias).any(|v| !v.is_finite()) {
                return Err(ArtifactError::Corrupt(format!(
                    "{} contains non-finite parameters",
                    layer.name
                )));
            }
        }

        if artifact.labels.len() != OUTPUT_CLASSES {
            return Err(ArtifactError::Corrupt(format!(
                "label table has {} entries, expected {}",
                artifact.labels.len(),
                OUTPUT_CLASSES
            )));
        }
        let mut labels = [PersonalityType::Istj; OUTPUT_CLASSES];
        for (slot, code) in labels.iter_mut().zip(&artifact.labels) {
            *slot = code
                .parse()
                .map_err(|e| ArtifactError::Corrupt(format!("label table: {}", e)))?;
        }

        Ok(Self {
            fc1,
            fc2,
            fc4,
            labels,
        })
    }

    /// Runs the network and returns the raw class scores.
    pub fn logits(&self, features: &[f32]) -> Result<Vec<f32>, InferenceError> {
        if features.len() != FEATURE_COUNT {
            return Err(InferenceError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }
        let h1 = self.fc1.forward(features, true)?;
        let h2 = self.fc2.forward(&h1, true)?;
        self.fc4.forward(&h2, false)
    }

    /// Predicts the highest-scoring label; ties go to the lowest class index.
    pub fn predict(&self, features: &[f32]) -> Result<PersonalityType, InferenceError> {
        let logits = self.logits(features)?;
        let best = logits
            .iter()
            .enumerate()
            .fold(0, |best, (i, v)| if *v > logits[best] { i } else { best });
        Ok(self.labels[best])
    }

    /// Returns the class index -> label table.
    pub fn labels(&self) -> &[PersonalityType; OUTPUT_CLASSES] {
        &self.labels
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn layer(rows: usize, cols: usize, weight: f32) -> StoredLayer {
        StoredLayer {
            rows,
            cols,
            weight: vec![weight; rows * cols],
            bias: vec![0.0; rows],
        }
    }

    /// An artifact whose output favours `winner` for any non-negative input.
    pub(crate) fn artifact_favouring(winner: usize) -> ModelArtifact {
        let mut fc4 = layer(OUTPUT_CLASSES, HIDDEN_2, 0.0);
        fc4.bias[winner] = 1.0;
        ModelArtifact {
            fc1: layer(HIDDEN_1, FEATURE_COUNT, 0.01),
            fc2: layer(HIDDEN_2, HIDDEN_1, 0.01),
            fc4,
            labels: PersonalityType::all().iter().map(|p| p.code().to_string()).collect(),
        }
    }

    #[test]
    fn network_predicts_favoured_label() {
        let net = PersonalityNetwork::from_artifact(artifact_favouring(3)).unwrap();
        let label = net.predict(&[1.0; FEATURE_COUNT]).unwrap();
        assert_eq!(label, PersonalityType::all()[3]);
    }

    #[test]
    fn network_ties_resolve_to_first_index() {
        let net = PersonalityNetwork::from_artifact(artifact_favouring(0)).unwrap();
        let mut artifact = artifact_favouring(0);
        artifact.fc4.bias = vec![0.5; OUTPUT_CLASSES];
        let flat = PersonalityNetwork::from_artifact(artifact).unwrap();
        assert_eq!(flat.predict(&[0.0; FEATURE_COUNT]).unwrap(), net.labels()[0]);
    }

    #[test]
    fn network_forward_matches_manual_computation() {
        let mut artifact = artifact_favouring(0);
        artifact.fc4.bias = vec![0.0; OUTPUT_CLASSES];
        // class 5 reads hidden unit 0 only
        artifact.fc4.weight[5 * HIDDEN_2] = 2.0;
        let net = PersonalityNetwork::from_artifact(artifact).unwrap();

        // h1 = 0.01 * 76 = 0.76 each; h2 = 0.01 * 0.76 * 32 = 0.2432 each
        let logits = net.logits(&[1.0; FEATURE_COUNT]).unwrap();
        assert!((logits[5] - 0.4864).abs() < 1e-4);
        assert_eq!(net.predict(&[1.0; FEATURE_COUNT]).unwrap(), PersonalityType::all()[5]);
    }

    #[test]
    fn network_relu_clips_negative_hidden_units() {
        let mut artifact = artifact_favouring(0);
        artifact.fc1 = layer(HIDDEN_1, FEATURE_COUNT, -1.0);
        artifact.fc4.bias = vec![0.0; OUTPUT_CLASSES];
        artifact.fc4.weight = vec![1.0; OUTPUT_CLASSES * HIDDEN_2];
        let net = PersonalityNetwork::from_artifact(artifact).unwrap();
        let logits = net.logits(&[1.0; FEATURE_COUNT]).unwrap();
        assert!(logits.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn network_rejects_wrong_shape() {
        let mut artifact = artifact_favouring(0);
        artifact.fc2 = layer(HIDDEN_2, 16, 0.1);
        assert!(matches!(
            PersonalityNetwork::from_artifact(artifact),
            Err(ArtifactError::Corrupt(msg)) if msg.contains("fc2")
        ));
    }

    #[test]
    fn network_rejects_truncated_weights() {
        let mut artifact = artifact_favouring(0);
        artifact.fc1.weight.pop();
        assert!(PersonalityNetwork::from_artifact(artifact).is_err());
    }

    #[test]
    fn network_rejects_bad_label_table() {
        let mut artifact = artifact_favouring(0);
        artifact.labels[7] = "ABCD".to_string();
        assert!(PersonalityNetwork::from_artifact(artifact).is_err());

        let mut short = artifact_favouring(0);
        short.labels.truncate(15);
        assert!(PersonalityNetwork::from_artifact(short).is_err());
    }

    #[test]
    fn network_rejects_non_finite_parameters() {
        let mut artifact = artifact_favouring(0);
        artifact.fc2.bias[0] = f32::NAN;
        assert!(PersonalityNetwork::from_artifact(artifact).is_err());
    }

    #[test]
    fn network_rejects_wrong_feature_count() {
        let net = PersonalityNetwork::from_artifact(artifact_favouring(0)).unwrap();
        assert_eq!(
            net.predict(&[1.0; 10]),
            Err(InferenceError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: 10
            })
        );
    }

    #[test]
    fn network_reports_overflow_as_non_finite() {
        let mut artifact = artifact_favouring(0);
        artifact.fc1 = layer(HIDDEN_1, FEATURE_COUNT, f32::MAX);
        let net = PersonalityNetwork::from_artifact(artifact).unwrap();
        assert_eq!(
            net.predict(&[100.0; FEATURE_COUNT]),
            Err(InferenceError::NonFinite { layer: "fc1" })
        );
    }
}
