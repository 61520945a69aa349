//! SpamScreen Session
//!
//! The per-session orchestration layer: takes submitted email text, runs it
//! through the classifier, records the result in the session history, and
//! fires the spoken announcement. History lives exactly as long as the
//! session and is never persisted.

pub mod announcer;
pub mod controller;
pub mod history;

pub use announcer::{Announcer, NullAnnouncer};
pub use controller::{Mode, SessionController, SubmitOutcome};
pub use history::HistoryStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::announcer::{Announcer, NullAnnouncer};
    pub use crate::controller::{Mode, SessionController, SubmitOutcome};
    pub use crate::history::HistoryStore;
}
