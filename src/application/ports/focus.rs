//! Focus probe port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::focus::FocusContext;

/// Focus automation errors
#[derive(Debug, Clone, Error)]
pub enum FocusError {
    #[error("Focus capture failed: {0}")]
    CaptureFailed(String),

    #[error("Failed to activate application '{target}': {message}")]
    ActivateFailed { target: String, message: String },
}

/// Port for capturing and restoring foreign application focus
#[async_trait]
pub trait FocusProbe: Send + Sync {
    /// Identify the application that currently owns input focus.
    ///
    /// The host program's own surfaces are never reported as a target;
    /// `Ok(None)` means no usable target (own window focused, or the
    /// platform gave nothing back). A failure is non-fatal: the caller
    /// keeps its previous context and the paste step falls back to
    /// direct injection.
    async fn capture(&self) -> Result<Option<FocusContext>, FocusError>;

    /// Bring the captured application back to the foreground.
    async fn activate(&self, target: &FocusContext) -> Result<(), FocusError>;

    /// Whether this platform supports reliable refocus-and-inject
    /// automation. When false, the paste step uses the direct branch
    /// unconditionally.
    fn supports_refocus(&self) -> bool;
}

/// Blanket implementation for boxed focus probes
#[async_trait]
impl FocusProbe for Box<dyn FocusProbe> {
    async fn capture(&self) -> Result<Option<FocusContext>, FocusError> {
        self.as_ref().capture().await
    }

    async fn activate(&self, target: &FocusContext) -> Result<(), FocusError> {
        self.as_ref().activate(target).await
    }

    fn supports_refocus(&self) -> bool {
        self.as_ref().supports_refocus()
    }
}
