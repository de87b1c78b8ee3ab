//! Picker surface port interface (boundary collaborator)

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::ClipboardEntry;

/// Picker surface errors
#[derive(Debug, Clone, Error)]
pub enum PickerError {
    #[error("Picker surface failed: {0}")]
    SurfaceFailed(String),
}

/// Port for the transient history-browsing surface.
///
/// Only the lifecycle contract lives here; no business logic. An
/// implementation is expected to: position itself relative to the input
/// pointer, clamped to the nearest display's usable work area; stay
/// visible across virtual desktops and above other windows; and close on
/// loss of input focus, explicit cancel, or selection.
#[async_trait]
pub trait PickerSurface: Send + Sync {
    /// Present the current history and block until the surface closes.
    ///
    /// Returns the selected index, or `None` on cancel or focus loss.
    async fn present(&self, entries: &[ClipboardEntry]) -> Result<Option<usize>, PickerError>;
}

/// Blanket implementation for boxed picker surfaces
#[async_trait]
impl PickerSurface for Box<dyn PickerSurface> {
    async fn present(&self, entries: &[ClipboardEntry]) -> Result<Option<usize>, PickerError> {
        self.as_ref().present(entries).await
    }
}
