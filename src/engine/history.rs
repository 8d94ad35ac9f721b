//! Bounded log of completed calculations.
//!
//! Every finished calculation is recorded newest-first; once the bound is
//! exceeded the oldest entry is evicted. The log lives only for the
//! session; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of calculations kept in [`History`].
pub const HISTORY_CAPACITY: usize = 10;

/// Record of a single completed calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Rendered form of the calculation, e.g. `"5 + 3 = 8"`
    pub calculation: String,
    /// When the calculation completed
    pub recorded_at: DateTime<Utc>,
}

/// Ordered history of completed calculations, newest first.
///
/// # Example
///
/// ```rust
/// use abacus::engine::History;
///
/// let mut history = History::new();
/// history.record("5 + 3 = 8".to_string());
/// history.record("8 × 2 = 16".to_string());
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().calculation, "8 × 2 = 16");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed calculation at the front of the log.
    ///
    /// Once [`HISTORY_CAPACITY`] entries exist, recording another evicts
    /// the oldest.
    pub fn record(&mut self, calculation: String) {
        self.entries.push_front(HistoryEntry {
            calculation,
            recorded_at: Utc::now(),
        });
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_prepends_entries() {
        let mut history = History::new();
        history.record("1 + 1 = 2".to_string());
        history.record("2 + 2 = 4".to_string());

        let rendered: Vec<&str> = history
            .entries()
            .map(|entry| entry.calculation.as_str())
            .collect();
        assert_eq!(rendered, vec!["2 + 2 = 4", "1 + 1 = 2"]);
    }

    #[test]
    fn capacity_evicts_the_oldest_entry() {
        let mut history = History::new();
        for i in 0..=HISTORY_CAPACITY {
            history.record(format!("{i} + 0 = {i}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        // The very first calculation fell off the back.
        assert!(history.entries().all(|entry| entry.calculation != "0 + 0 = 0"));
        assert_eq!(
            history.latest().unwrap().calculation,
            format!("{n} + 0 = {n}", n = HISTORY_CAPACITY)
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new();
        history.record("5 + 3 = 8".to_string());

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
