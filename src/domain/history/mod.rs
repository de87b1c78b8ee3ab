//! Clipboard history model

mod entry;
mod store;

pub use entry::{now_millis, ClipboardEntry};
pub use store::{HistoryStore, PromoteError, DEFAULT_CAPACITY};
