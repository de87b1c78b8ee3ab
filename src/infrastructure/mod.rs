//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard, keystroke automation,
//! focus automation, and the filesystem.

pub mod clipboard;
pub mod config;
pub mod focus;
pub mod keystroke;
pub mod picker;
pub mod snapshot;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use focus::create_focus_probe;
pub use keystroke::{create_paste_keys, EnigoPasteKeys, NoOpPasteKeys, PasteToolPreference};
pub use picker::NullPicker;
pub use snapshot::JsonSnapshotStore;
