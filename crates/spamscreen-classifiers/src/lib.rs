//! SpamScreen Classifiers
//!
//! Bag-of-words text vectorization, a linear spam model, and the artifact
//! loading that turns two pre-trained blobs into a ready-to-use classifier.
//!
//! The model pair is produced offline by a training pipeline; this crate only
//! loads it. The `Vectorizer` and `Predictor` traits keep the rest of the
//! system decoupled from the artifact format, and `Classifier` is the seam
//! the session layer classifies through.

pub mod bundle;
pub mod classifier;
pub mod linear;
pub mod vectorizer;

pub use bundle::{ModelBundle, ARTIFACT_VERSION};
pub use classifier::{Classifier, SpamClassifier};
pub use linear::{LinearModel, Predictor};
pub use vectorizer::{CountVectorizer, Vectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bundle::ModelBundle;
    pub use crate::classifier::{Classifier, SpamClassifier};
    pub use crate::linear::{LinearModel, Predictor};
    pub use crate::vectorizer::{CountVectorizer, Vectorizer};
}
