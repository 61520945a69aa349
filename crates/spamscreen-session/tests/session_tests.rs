//! Session controller behavior tests
//!
//! Built against an in-memory bundle so no artifact files or audio are
//! needed. The bundle leans spam on "win"/"free"/"prize"/"now" and ham on
//! "meeting"/"tomorrow", with a slightly negative intercept.

use parking_lot::Mutex;
use spamscreen_classifiers::{CountVectorizer, LinearModel, ModelBundle, SpamClassifier};
use spamscreen_core::Label;
use spamscreen_session::{Announcer, HistoryStore, Mode, NullAnnouncer, SessionController, SubmitOutcome};
use std::sync::Arc;

/// Announcer that records every phrase it is handed
#[derive(Default)]
struct RecordingAnnouncer {
    phrases: Mutex<Vec<String>>,
}

impl RecordingAnnouncer {
    fn phrases(&self) -> Vec<String> {
        self.phrases.lock().clone()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, text: &str) {
        self.phrases.lock().push(text.to_string());
    }
}

fn test_bundle() -> Arc<ModelBundle> {
    let vectorizer =
        CountVectorizer::from_vocabulary(["win", "free", "prize", "now", "meeting", "tomorrow"])
            .unwrap();
    let model = LinearModel::new(vec![1.0, 1.2, 1.5, 0.8, -1.5, -1.0], -0.5);
    Arc::new(ModelBundle::new(Arc::new(vectorizer), Arc::new(model)).unwrap())
}

fn controller_with(announcer: Arc<dyn Announcer>) -> SessionController {
    let classifier = Arc::new(SpamClassifier::new(test_bundle()));
    SessionController::new(classifier, announcer, HistoryStore::new())
}

fn controller() -> SessionController {
    controller_with(Arc::new(NullAnnouncer))
}

#[tokio::test]
async fn test_spam_submission() {
    let announcer = Arc::new(RecordingAnnouncer::default());
    let controller = controller_with(announcer.clone());

    let outcome = controller.submit("WIN A FREE PRIZE NOW").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Classified(Label::Spam));

    let history = controller.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message, "WIN A FREE PRIZE NOW");
    assert_eq!(history[0].label, Label::Spam);

    assert_eq!(announcer.phrases(), vec!["This is A Spam Email"]);
}

#[tokio::test]
async fn test_not_spam_submission() {
    let announcer = Arc::new(RecordingAnnouncer::default());
    let controller = controller_with(announcer.clone());

    let before = controller.history().len();
    let outcome = controller
        .submit("Meeting moved to 3pm tomorrow")
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Classified(Label::NotSpam));
    assert_eq!(controller.history().len(), before + 1);

    assert_eq!(announcer.phrases(), vec!["This is Not A Spam Email"]);
}

#[tokio::test]
async fn test_empty_submission_is_rejected_without_mutation() {
    let announcer = Arc::new(RecordingAnnouncer::default());
    let controller = controller_with(announcer.clone());

    let outcome = controller.submit("").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::EmptyInput);

    let outcome = controller.submit("   ").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::EmptyInput);

    let outcome = controller.submit("\n\t  \n").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::EmptyInput);

    assert!(controller.history().is_empty());
    assert!(announcer.phrases().is_empty());
}

#[tokio::test]
async fn test_history_grows_in_submission_order() {
    let controller = controller();

    let messages = [
        "win free prize now",
        "meeting tomorrow",
        "free prize",
        "meeting meeting meeting",
    ];
    for message in &messages {
        let outcome = controller.submit(message).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Classified(_)));
    }

    let history = controller.history();
    assert_eq!(history.len(), messages.len());
    for (record, message) in history.iter().zip(&messages) {
        assert_eq!(record.message, *message);
    }
    assert_eq!(history[0].label, Label::Spam);
    assert_eq!(history[1].label, Label::NotSpam);
    assert_eq!(history[2].label, Label::Spam);
    assert_eq!(history[3].label, Label::NotSpam);
}

#[tokio::test]
async fn test_clear_history_always_empties() {
    let controller = controller();

    assert!(controller.history().is_empty());
    controller.clear_history();
    assert!(controller.history().is_empty());

    for i in 0..5 {
        controller
            .submit(&format!("free prize number {i}"))
            .await
            .unwrap();
    }
    assert_eq!(controller.history().len(), 5);

    controller.clear_history();
    assert!(controller.history().is_empty());
}

#[tokio::test]
async fn test_view_history_is_idempotent() {
    let controller = controller();
    controller.submit("win free prize now").await.unwrap();
    controller.submit("meeting tomorrow").await.unwrap();

    let first = controller.history();
    let second = controller.history();
    let third = controller.history();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_repeated_submits_are_deterministic() {
    let controller = controller();

    let mut labels = Vec::new();
    for _ in 0..5 {
        match controller.submit("free prize tomorrow").await.unwrap() {
            SubmitOutcome::Classified(label) => labels.push(label),
            other => panic!("expected classification, got {other:?}"),
        }
    }
    assert!(labels.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_history_cap_is_honored() {
    let classifier = Arc::new(SpamClassifier::new(test_bundle()));
    let controller = SessionController::new(
        classifier,
        Arc::new(NullAnnouncer),
        HistoryStore::with_capacity(Some(3)),
    );

    for i in 0..6 {
        controller.submit(&format!("free prize {i}")).await.unwrap();
    }

    let history = controller.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].message, "free prize 3");
    assert_eq!(history[2].message, "free prize 5");
}

#[test]
fn test_entry_mode_is_classify() {
    assert_eq!(Mode::default(), Mode::Classify);
}
