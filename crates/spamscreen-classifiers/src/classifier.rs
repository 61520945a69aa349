//! Classifier trait and the bundle-backed spam classifier

use crate::bundle::ModelBundle;
use async_trait::async_trait;
use spamscreen_core::{Label, Result};
use std::sync::Arc;

/// Trait for all classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Label>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Spam classifier backed by a loaded model bundle.
///
/// Deterministic: the same text against the same bundle always yields the
/// same label, and classification never mutates the bundle.
pub struct SpamClassifier {
    name: String,
    bundle: Arc<ModelBundle>,
}

impl SpamClassifier {
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self::with_name("spam", bundle)
    }

    pub fn with_name(name: impl Into<String>, bundle: Arc<ModelBundle>) -> Self {
        Self {
            name: name.into(),
            bundle,
        }
    }
}

#[async_trait]
impl Classifier for SpamClassifier {
    async fn classify(&self, text: &str) -> Result<Label> {
        let features = self.bundle.vectorizer().transform(text);
        let class = self.bundle.model().predict(&features)?;
        let label = Label::from_class_index(class);
        tracing::debug!(classifier = %self.name, class, ?label, "classified message");
        Ok(label)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
