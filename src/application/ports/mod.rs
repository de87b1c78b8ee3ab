//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod focus;
pub mod keystroke;
pub mod picker;
pub mod snapshot;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use focus::{FocusError, FocusProbe};
pub use keystroke::{KeystrokeError, PasteKeys};
pub use picker::{PickerError, PickerSurface};
pub use snapshot::{SnapshotError, SnapshotStore};
