//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod history;
pub mod notify;
pub mod paste;
pub mod ports;
pub mod watcher;

// Re-export use cases
pub use history::ClipboardHistoryUseCase;
pub use notify::{ChangeNotifier, HistoryChange};
pub use paste::PasteInjector;
pub use watcher::ClipboardWatcher;
