//! Paste keystroke port interface

use async_trait::async_trait;
use thiserror::Error;

/// Keystroke errors
#[derive(Debug, Clone, Error)]
pub enum KeystrokeError {
    #[error("{0} not found. Please install it or pick another paste tool.")]
    ToolNotFound(String),

    #[error("Failed to deliver paste keystroke: {0}")]
    PasteFailed(String),
}

/// Port for delivering the platform paste key combination
/// (primary modifier + "V") to whatever currently holds focus.
#[async_trait]
pub trait PasteKeys: Send + Sync {
    /// Deliver a single paste chord.
    ///
    /// Best-effort: delivery is not confirmed, and callers must treat a
    /// failure as "clipboard updated, paste not delivered".
    async fn send_paste(&self) -> Result<(), KeystrokeError>;
}

/// Blanket implementation for boxed paste-key types
#[async_trait]
impl PasteKeys for Box<dyn PasteKeys> {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        self.as_ref().send_paste().await
    }
}
