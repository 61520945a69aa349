//! In-memory, session-lifetime classification history

use parking_lot::RwLock;
use spamscreen_core::HistoryRecord;
use std::collections::VecDeque;

/// Append-only, insertion-ordered log of classified messages.
///
/// Owned by the session controller; mutation is crate-private so nothing
/// outside the session layer can write records directly. An optional cap
/// evicts the oldest record once the log grows past it; without a cap the
/// log is bounded only by memory, like the original demo.
pub struct HistoryStore {
    records: RwLock<VecDeque<HistoryRecord>>,
    max_records: Option<usize>,
}

impl HistoryStore {
    /// Create an unbounded history store
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    /// Create a history store that keeps at most `max_records` entries
    pub fn with_capacity(max_records: Option<usize>) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            max_records,
        }
    }

    /// Append a record to the end of the log
    pub(crate) fn append(&self, record: HistoryRecord) {
        let mut records = self.records.write();
        records.push_back(record);
        if let Some(max) = self.max_records {
            while records.len() > max {
                records.pop_front();
            }
        }
    }

    /// Reset the log to empty
    pub(crate) fn clear(&self) {
        self.records.write().clear();
    }

    /// Insertion-ordered copy of the log, most recent last
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        self.records.read().iter().cloned().collect()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
