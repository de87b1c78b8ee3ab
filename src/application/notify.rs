//! Single-slot change notification

use std::fmt;
use std::sync::Mutex;

/// Kind of history mutation, carried to the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    /// History restored from the snapshot at startup
    Loaded,
    /// A new or re-copied entry moved to the front
    Inserted,
    /// An existing entry was re-selected and moved to the front
    Promoted,
    /// History was emptied
    Cleared,
}

impl fmt::Display for HistoryChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryChange::Loaded => write!(f, "loaded"),
            HistoryChange::Inserted => write!(f, "inserted"),
            HistoryChange::Promoted => write!(f, "promoted"),
            HistoryChange::Cleared => write!(f, "cleared"),
        }
    }
}

type Listener = Box<dyn Fn(HistoryChange) + Send + Sync>;

/// Single-slot change notifier.
///
/// Exactly one listener is held at a time; a later registration silently
/// replaces an earlier one. Emitting with no listener attached is a no-op,
/// so mutating code never needs to know whether anyone is watching.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Mutex<Option<Listener>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listener, replacing any previous one
    pub fn register<F>(&self, listener: F)
    where
        F: Fn(HistoryChange) + Send + Sync + 'static,
    {
        let mut slot = self.listener.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Box::new(listener));
    }

    /// Remove the listener, if any
    pub fn unregister(&self) {
        let mut slot = self.listener.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Invoke the registered listener with a change-kind tag
    pub fn emit(&self, change: HistoryChange) {
        let slot = self.listener.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(listener) = slot.as_ref() {
            listener(change);
        }
    }
}
