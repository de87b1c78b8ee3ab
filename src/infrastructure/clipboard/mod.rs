//! Clipboard infrastructure module

mod arboard;

pub use arboard::ArboardClipboard;
