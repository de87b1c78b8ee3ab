//! Null picker surface

use async_trait::async_trait;

use crate::application::ports::{PickerError, PickerSurface};
use crate::domain::history::ClipboardEntry;

/// Picker adapter for headless operation.
///
/// A real shell (tray menu, popup window) implements `PickerSurface`
/// against its own toolkit; this one never makes a selection, so `show`
/// only refreshes the focus context.
pub struct NullPicker;

impl NullPicker {
    /// Create a new null picker
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PickerSurface for NullPicker {
    async fn present(&self, _entries: &[ClipboardEntry]) -> Result<Option<usize>, PickerError> {
        Ok(None)
    }
}
