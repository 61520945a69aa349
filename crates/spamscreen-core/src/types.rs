//! Core types for SpamScreen

use serde::{Deserialize, Serialize};

/// Binary classification outcome for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// The message is not spam
    NotSpam,
    /// The message is spam
    Spam,
}

impl Label {
    /// Map a model class index to a label.
    ///
    /// Class `0` is not-spam; any other class is spam.
    pub fn from_class_index(class: i64) -> Self {
        if class == 0 {
            Self::NotSpam
        } else {
            Self::Spam
        }
    }

    /// The fixed phrase announced aloud for this label
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::NotSpam => "This is Not A Spam Email",
            Self::Spam => "This is A Spam Email",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSpam => write!(f, "Not Spam"),
            Self::Spam => write!(f, "Spam"),
        }
    }
}

/// One classified message in the session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The email text as submitted
    pub message: String,

    /// The label the classifier returned for it
    pub label: Label,
}

impl HistoryRecord {
    /// Create a new history record
    pub fn new(message: impl Into<String>, label: Label) -> Self {
        Self {
            message: message.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_mapping() {
        assert_eq!(Label::from_class_index(0), Label::NotSpam);
        assert_eq!(Label::from_class_index(1), Label::Spam);
        assert_eq!(Label::from_class_index(7), Label::Spam);
        assert_eq!(Label::from_class_index(-1), Label::Spam);
    }

    #[test]
    fn test_announcement_phrases() {
        assert_eq!(Label::Spam.announcement(), "This is A Spam Email");
        assert_eq!(Label::NotSpam.announcement(), "This is Not A Spam Email");
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Spam.to_string(), "Spam");
        assert_eq!(Label::NotSpam.to_string(), "Not Spam");
    }

    #[test]
    fn test_record_roundtrip() {
        let record = HistoryRecord::new("hello there", Label::NotSpam);
        let json = serde_json::to_string(&record).unwrap();
        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
