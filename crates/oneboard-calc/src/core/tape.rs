//! Press tape: a bounded log of key presses and the display they produced

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::key::Key;
use crate::core::CalcResult;

/// One key press and the display right after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The key that was pressed
    pub key: Key,
    /// Display text after the press
    pub display: String,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(key: Key, display: impl Into<String>) -> Self {
        Self {
            key,
            display: display.into(),
        }
    }

    /// Returns a single-line rendering, e.g. `× → 5`
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} → {}", self.key, self.display)
    }
}

/// Bounded FIFO of tape entries, oldest evicted first
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default number of presses kept
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Creates a tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape holding at most `capacity` entries (minimum 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Appends a press, evicting the oldest entry when full
    pub fn record(&mut self, key: Key, display: &str) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TapeEntry::new(key, display));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Returns the entry at `index` (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// Serializes the entries (oldest first) to a JSON array
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}
