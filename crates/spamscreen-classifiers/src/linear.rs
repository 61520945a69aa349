//! Linear decision model over bag-of-words features

use serde::{Deserialize, Serialize};
use spamscreen_core::{Error, Result};

/// Capability to turn a feature vector into a class index
pub trait Predictor: Send + Sync {
    /// Predict a class index for the given feature vector.
    ///
    /// Fails with an inference error if the feature vector's length does
    /// not match the model's expected dimension.
    fn predict(&self, features: &[f32]) -> Result<i64>;

    /// Feature dimension this model expects
    fn dimension(&self) -> usize;
}

/// On-disk schema for the model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact schema version
    pub version: u32,

    /// One weight per vectorizer feature column
    pub weights: Vec<f32>,

    /// Decision function intercept
    pub intercept: f32,
}

/// Binary linear classifier: class 1 when the decision function is
/// positive, class 0 otherwise.
pub struct LinearModel {
    weights: Vec<f32>,
    intercept: f32,
}

impl LinearModel {
    pub fn new(weights: Vec<f32>, intercept: f32) -> Self {
        Self { weights, intercept }
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self::new(artifact.weights, artifact.intercept)
    }

    /// Raw decision function value for a feature vector
    pub fn decision(&self, features: &[f32]) -> Result<f32> {
        if features.len() != self.weights.len() {
            return Err(Error::inference(format!(
                "feature dimension {} does not match model dimension {}",
                features.len(),
                self.weights.len()
            )));
        }
        let dot: f32 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.intercept)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f32]) -> Result<i64> {
        let decision = self.decision(features)?;
        Ok(if decision > 0.0 { 1 } else { 0 })
    }

    fn dimension(&self) -> usize {
        self.weights.len()
    }
}
