//! Bounded, deduplicated, recency-ordered history store

use thiserror::Error;

use super::entry::ClipboardEntry;

/// Default maximum number of retained entries
pub const DEFAULT_CAPACITY: usize = 30;

/// Error when promoting an entry at an out-of-range index
#[derive(Debug, Clone, Error)]
#[error("index {index} out of range (history length {len})")]
pub struct PromoteError {
    pub index: usize,
    pub len: usize,
}

/// In-memory clipboard history, most-recent-first.
///
/// Invariants:
/// - length never exceeds the capacity bound
/// - no two entries share identical content
/// - order reflects recency of last copy or selection, not creation time
///
/// The store is a pure data structure; persistence and change notification
/// are layered on top by the use case.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<ClipboardEntry>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store with a custom capacity bound
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Insert content at the front with a fresh timestamp.
    ///
    /// Any existing entry with identical content is removed first, so
    /// re-copying something already in history moves it to the front
    /// (with a new timestamp) instead of duplicating it. The tail is
    /// truncated to the capacity bound.
    pub fn insert(&mut self, content: impl Into<String>) -> &ClipboardEntry {
        let content = content.into();
        self.entries.retain(|e| e.content != content);
        self.entries.insert(0, ClipboardEntry::new(content));
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    /// Move the entry at `index` to the front without altering it.
    ///
    /// Unlike `insert`, the timestamp is preserved: a user re-selecting an
    /// item is not a fresh external copy. An out-of-range index fails and
    /// leaves the store untouched.
    pub fn promote(&mut self, index: usize) -> Result<(), PromoteError> {
        if index >= self.entries.len() {
            return Err(PromoteError {
                index,
                len: self.entries.len(),
            });
        }

        let entry = self.entries.remove(index);
        self.entries.insert(0, entry);
        Ok(())
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the contents from a persisted snapshot, enforcing the
    /// capacity bound
    pub fn restore(&mut self, entries: Vec<ClipboardEntry>) {
        self.entries = entries;
        self.entries.truncate(self.capacity);
    }

    /// Entries, most-recent-first
    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    /// Entry at the front, if any
    pub fn front(&self) -> Option<&ClipboardEntry> {
        self.entries.first()
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

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
