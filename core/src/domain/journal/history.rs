use std::collections::VecDeque;

use crate::domain::journal::entities::JournalEntry;

pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Ordered journal history of one session, most recent entry first. Holds at
/// most `max_entries`; the oldest entries are dropped past that.
#[derive(Debug, Clone)]
pub struct JournalHistory {
    entries: VecDeque<JournalEntry>,
    max_entries: usize,
}

impl Default for JournalHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }
}

impl JournalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn add_entry(&mut self, entry: JournalEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.max_entries);
    }

    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}
