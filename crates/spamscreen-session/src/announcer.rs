//! Fire-and-forget spoken announcement capability

/// Capability to render a phrase audibly.
///
/// Fire and forget: completion is never awaited and failures must never
/// affect the classification result already computed. Implementations own
/// whatever audio machinery they need; the session layer only hands over
/// the phrase.
pub trait Announcer: Send + Sync {
    fn announce(&self, text: &str);
}

/// Announcer that does nothing, for hosts without audio and for tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&self, _text: &str) {}
}
