//! Keystroke infrastructure module
//!
//! Provides cross-platform paste-chord delivery using enigo (primary)
//! or xdotool as a native alternative on Linux X11.

mod enigo;
mod factory;
mod noop;
#[cfg(target_os = "linux")]
mod xdotool;

pub use enigo::EnigoPasteKeys;
pub use factory::{create_paste_keys, PasteToolPreference};
pub use noop::NoOpPasteKeys;
#[cfg(target_os = "linux")]
pub use xdotool::XdotoolPasteKeys;
