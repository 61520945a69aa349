//! Bag-of-words text vectorization over a fixed, pre-learned vocabulary

use regex::Regex;
use serde::{Deserialize, Serialize};
use spamscreen_core::{Error, Result};
use std::collections::HashMap;

/// Word-token pattern: two or more word characters, Unicode-aware.
/// Single-character tokens ("a", "I") carry no signal and are dropped,
/// matching how the training pipeline tokenized the corpus.
const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Capability to turn raw text into a fixed-dimension feature vector
pub trait Vectorizer: Send + Sync {
    /// Transform text into a feature vector of length `dimension()`
    fn transform(&self, text: &str) -> Vec<f32>;

    /// Number of features this vectorizer produces
    fn dimension(&self) -> usize;
}

/// On-disk schema for the vectorizer artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Artifact schema version
    pub version: u32,

    /// Token -> feature column index
    pub vocabulary: HashMap<String, usize>,
}

/// Term-count vectorizer over a fixed vocabulary.
///
/// Tokens not in the vocabulary are ignored, never an error.
#[derive(Debug)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
    dimension: usize,
    token_pattern: Regex,
}

impl CountVectorizer {
    /// Build a vectorizer from a deserialized artifact.
    ///
    /// Every vocabulary index must fall inside the feature space spanned by
    /// the vocabulary size; a stray index means a corrupt artifact.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        let dimension = artifact.vocabulary.len();
        for (token, &index) in &artifact.vocabulary {
            if index >= dimension {
                return Err(Error::artifact_load(format!(
                    "vocabulary index {index} for token {token:?} out of range (dimension {dimension})"
                )));
            }
        }
        Self::build(artifact.vocabulary, dimension)
    }

    /// Build a vectorizer from a plain token list, one column per token in
    /// the order given. Used by tests and tooling.
    pub fn from_vocabulary<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            let next = vocabulary.len();
            vocabulary.entry(token.into()).or_insert(next);
        }
        let dimension = vocabulary.len();
        Self::build(vocabulary, dimension)
    }

    fn build(vocabulary: HashMap<String, usize>, dimension: usize) -> Result<Self> {
        let token_pattern = Regex::new(TOKEN_PATTERN).map_err(|e| {
            Error::artifact_load(format!("failed to build token pattern: {e}"))
        })?;
        Ok(Self {
            vocabulary,
            dimension,
            token_pattern,
        })
    }

    /// Number of known vocabulary terms
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Vectorizer for CountVectorizer {
    fn transform(&self, text: &str) -> Vec<f32> {
        let mut features = vec![0.0f32; self.dimension];
        for token in self.token_pattern.find_iter(text) {
            let token = token.as_str().to_lowercase();
            if let Some(&index) = self.vocabulary.get(&token) {
                features[index] += 1.0;
            }
        }
        features
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
