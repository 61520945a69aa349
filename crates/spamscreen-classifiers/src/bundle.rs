//! Loading the pre-trained vectorizer/model artifact pair

use crate::linear::{LinearModel, ModelArtifact, Predictor};
use crate::vectorizer::{CountVectorizer, Vectorizer, VectorizerArtifact};
use spamscreen_core::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Artifact schema version this build understands
pub const ARTIFACT_VERSION: u32 = 1;

/// The loaded vectorizer + classifier pair.
///
/// Loaded once at startup, immutable afterwards, shared read-only across
/// every classification call for the lifetime of the process.
pub struct ModelBundle {
    vectorizer: Arc<dyn Vectorizer>,
    model: Arc<dyn Predictor>,
}

impl ModelBundle {
    /// Load both artifacts from disk, called exactly once at process start.
    ///
    /// Any failure here is fatal: a missing or unreadable file, malformed
    /// JSON, an unsupported schema version, or a vectorizer whose feature
    /// space does not match the model's weight vector. The caller must
    /// surface the error and refuse to serve classification requests.
    pub fn load(vectorizer_path: impl AsRef<Path>, model_path: impl AsRef<Path>) -> Result<Self> {
        let vectorizer_path = vectorizer_path.as_ref();
        let model_path = model_path.as_ref();

        let vectorizer_artifact: VectorizerArtifact = read_artifact(vectorizer_path)?;
        check_version(vectorizer_artifact.version, vectorizer_path)?;

        let model_artifact: ModelArtifact = read_artifact(model_path)?;
        check_version(model_artifact.version, model_path)?;

        let vectorizer = CountVectorizer::from_artifact(vectorizer_artifact)?;
        let model = LinearModel::from_artifact(model_artifact);

        let bundle = Self::new(Arc::new(vectorizer), Arc::new(model))?;
        tracing::info!(
            vectorizer = %vectorizer_path.display(),
            model = %model_path.display(),
            dimension = bundle.vectorizer.dimension(),
            "loaded model bundle"
        );
        Ok(bundle)
    }

    /// Pair an already-built vectorizer and model, checking that they agree
    /// on the feature dimension.
    pub fn new(vectorizer: Arc<dyn Vectorizer>, model: Arc<dyn Predictor>) -> Result<Self> {
        if vectorizer.dimension() != model.dimension() {
            return Err(Error::artifact_load(format!(
                "vectorizer dimension {} does not match model dimension {}",
                vectorizer.dimension(),
                model.dimension()
            )));
        }
        Ok(Self { vectorizer, model })
    }

    /// The bundle's vectorizer
    pub fn vectorizer(&self) -> &dyn Vectorizer {
        self.vectorizer.as_ref()
    }

    /// The bundle's classifier model
    pub fn model(&self) -> &dyn Predictor {
        self.model.as_ref()
    }
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("dimension", &self.vectorizer.dimension())
            .finish_non_exhaustive()
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read(path).map_err(|e| {
        Error::artifact_load(format!("failed to read artifact {}: {e}", path.display()))
    })?;
    serde_json::from_slice(&data).map_err(|e| {
        Error::artifact_load(format!("failed to parse artifact {}: {e}", path.display()))
    })
}

fn check_version(version: u32, path: &Path) -> Result<()> {
    if version != ARTIFACT_VERSION {
        return Err(Error::artifact_load(format!(
            "artifact {} has schema version {version}, expected {ARTIFACT_VERSION}",
            path.display()
        )));
    }
    Ok(())
}
