//! Focus automation infrastructure module
//!
//! Application-level refocus automation is only reliable on macOS, where
//! System Events can name and re-activate the frontmost application. On
//! other platforms a no-op probe is used and paste delivery falls back to
//! the direct branch.

mod noop;
#[cfg(target_os = "macos")]
mod osascript;

pub use noop::NoOpFocusProbe;
#[cfg(target_os = "macos")]
pub use osascript::OsascriptFocusProbe;

use crate::application::ports::FocusProbe;

/// Create the focus probe for the current platform
pub fn create_focus_probe() -> Box<dyn FocusProbe> {
    #[cfg(target_os = "macos")]
    {
        Box::new(OsascriptFocusProbe::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(NoOpFocusProbe::new())
    }
}
