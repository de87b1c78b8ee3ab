//! Xdotool paste adapter for X11 support

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{KeystrokeError, PasteKeys};

/// Xdotool paste adapter for X11 keystroke injection
///
/// Uses xdotool which works on X11 systems.
pub struct XdotoolPasteKeys;

impl XdotoolPasteKeys {
    /// Create a new xdotool paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for XdotoolPasteKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteKeys for XdotoolPasteKeys {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        let status = Command::new("xdotool")
            .args(["key", "--clearmodifiers", "ctrl+v"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    KeystrokeError::ToolNotFound("xdotool".to_string())
                } else {
                    KeystrokeError::PasteFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(KeystrokeError::PasteFailed(format!(
                "xdotool exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
