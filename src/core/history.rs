//! Bounded calculation history.
//!
//! The log is append-only with FIFO eviction: once it holds `capacity`
//! entries, every new record pushes out the oldest one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::trace;

/// Number of entries kept when no configuration overrides it.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// One completed operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Rendered record, e.g. `"5 + 3 = 8"`
    pub text: String,
    /// When the record was appended
    pub recorded_at: DateTime<Utc>,
}

/// Ordered log of completed operations with a fixed capacity.
///
/// # Example
///
/// ```rust
/// use abacus::core::History;
///
/// let mut history = History::with_capacity(2);
/// history.push("1 + 1 = 2");
/// history.push("2 + 2 = 4");
/// history.push("3 + 3 = 6");
///
/// assert_eq!(history.snapshot(), vec!["2 + 2 = 4", "3 + 3 = 6"]);
/// ```
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one so the newest record is
    /// always retained.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn push(&mut self, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                trace!(entry = %evicted.text, "history full, evicted oldest entry");
            }
        }
        self.entries.push_back(HistoryEntry {
            text: text.into(),
            recorded_at: Utc::now(),
        });
    }

    /// Ordered copy of the record texts, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.text.clone()).collect()
    }

    /// Iterate over the full entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(|entry| entry.text.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(history.snapshot().is_empty());
        assert_eq!(history.last(), None);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut history = History::default();
        history.push("first");
        history.push("second");
        history.push("third");

        assert_eq!(history.snapshot(), vec!["first", "second", "third"]);
        assert_eq!(history.last(), Some("third"));
    }

    #[test]
    fn hundred_and_first_entry_evicts_the_oldest() {
        let mut history = History::default();
        for i in 0..DEFAULT_HISTORY_CAPACITY {
            history.push(format!("entry {i}"));
        }
        assert_eq!(history.len(), 100);

        history.push("entry 100");

        let snapshot = history.snapshot();
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot[0], "entry 1");
        assert_eq!(snapshot[99], "entry 100");
    }

    #[test]
    fn snapshot_is_detached() {
        let mut history = History::default();
        history.push("a");
        let snapshot = history.snapshot();

        history.push("b");

        assert_eq!(snapshot, vec!["a"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut history = History::default();
        history.push("a");
        history.push("b");

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn zero_capacity_keeps_latest_entry() {
        let mut history = History::with_capacity(0);
        history.push("a");
        history.push("b");

        assert_eq!(history.snapshot(), vec!["b"]);
    }

    #[test]
    fn entries_are_timestamped_in_order() {
        let mut history = History::default();
        history.push("a");
        history.push("b");

        let stamps: Vec<_> = history.entries().map(|e| e.recorded_at).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn entry_serializes_correctly() {
        let entry = HistoryEntry {
            text: "√(9) = 3".to_string(),
            recorded_at: Utc::now(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: HistoryEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }
}
