//! Clipboard history entry value object

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Current wall-clock time as epoch milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// One recorded clipboard value with its last-touched timestamp.
///
/// Entries are immutable once created. Re-inserting identical content
/// produces a fresh entry with a new timestamp; promotion moves an entry
/// without touching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub content: String,
    pub timestamp: u64,
}

impl ClipboardEntry {
    /// Create an entry stamped with the current time
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: now_millis(),
        }
    }

    /// Create an entry with an explicit timestamp (snapshot restore)
    pub fn with_timestamp(content: impl Into<String>, timestamp: u64) -> Self {
        Self {
            content: content.into(),
            timestamp,
        }
    }
}
