//! No-op paste adapter

use async_trait::async_trait;

use crate::application::ports::{KeystrokeError, PasteKeys};

/// No-op paste adapter that does nothing
///
/// Used when paste delivery is disabled; the clipboard still gets the
/// selected content and the user pastes manually.
pub struct NoOpPasteKeys;

impl NoOpPasteKeys {
    /// Create a new no-op paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpPasteKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteKeys for NoOpPasteKeys {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        // Do nothing
        Ok(())
    }
}
