//! Error types for SpamScreen

/// Result type alias using SpamScreen's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SpamScreen operations.
///
/// Both variants are fatal: an artifact load error aborts startup, an
/// inference error means the deployed vectorizer/model pair is broken.
/// Empty user input is not an error and is handled by the session layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model artifact loading errors (fatal at startup)
    #[error("artifact load error: {0}")]
    ArtifactLoad(String),

    /// Inference errors from a mismatched vectorizer/model pair
    #[error("inference error: {0}")]
    Inference(String),
}

impl Error {
    /// Create a new artifact load error
    pub fn artifact_load(msg: impl Into<String>) -> Self {
        Self::ArtifactLoad(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::artifact_load("vectorizer.json not found");
        assert_eq!(
            err.to_string(),
            "artifact load error: vectorizer.json not found"
        );

        let err = Error::inference("feature dimension 10 does not match model dimension 12");
        assert!(err.to_string().starts_with("inference error:"));
    }
}
