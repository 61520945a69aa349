//! Session controller: submit, view history, clear history

use crate::announcer::Announcer;
use crate::history::HistoryStore;
use spamscreen_classifiers::Classifier;
use spamscreen_core::{HistoryRecord, Label, Result};
use std::sync::Arc;

/// Presentation modes the host surface can put the session in.
///
/// Mode is chosen per interaction by the host; the controller itself is
/// stateless across modes apart from owning the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paste text and classify it (entry mode)
    #[default]
    Classify,
    /// Browse and clear the session history
    History,
    /// Static description of the application
    About,
}

/// Outcome of a submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was classified and recorded
    Classified(Label),
    /// The message was empty or whitespace-only; nothing was classified,
    /// recorded, or announced. The caller should re-prompt.
    EmptyInput,
}

/// Orchestrates one user session: classification, history, announcements.
///
/// Owns the history store exclusively; collaborators are injected so the
/// classification flow can be tested without audio or real artifacts.
pub struct SessionController {
    classifier: Arc<dyn Classifier>,
    announcer: Arc<dyn Announcer>,
    history: HistoryStore,
}

impl SessionController {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        announcer: Arc<dyn Announcer>,
        history: HistoryStore,
    ) -> Self {
        Self {
            classifier,
            announcer,
            history,
        }
    }

    /// Classify a submitted message, record it, and announce the verdict.
    ///
    /// Empty or whitespace-only input short-circuits to
    /// [`SubmitOutcome::EmptyInput`] without touching any state. A
    /// classification error propagates and leaves the history unchanged.
    pub async fn submit(&self, message: &str) -> Result<SubmitOutcome> {
        if message.trim().is_empty() {
            tracing::debug!("empty submission, re-prompting");
            return Ok(SubmitOutcome::EmptyInput);
        }

        let label = self.classifier.classify(message).await?;
        self.history.append(HistoryRecord::new(message, label));
        self.announcer.announce(label.announcement());
        tracing::info!(%label, history_len = self.history.len(), "message classified");

        Ok(SubmitOutcome::Classified(label))
    }

    /// Insertion-ordered snapshot of the session history
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.history.snapshot()
    }

    /// Drop all history records
    pub fn clear_history(&self) {
        self.history.clear();
        tracing::info!("history cleared");
    }
}
