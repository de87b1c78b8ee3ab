//! Cross-platform paste-chord adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Sends the platform
//! paste combination: Cmd+V on macOS, Ctrl+V elsewhere.

use async_trait::async_trait;

use crate::application::ports::{KeystrokeError, PasteKeys};

/// Cross-platform paste-chord adapter using enigo
pub struct EnigoPasteKeys;

impl EnigoPasteKeys {
    /// Create a new enigo paste adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoPasteKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasteKeys for EnigoPasteKeys {
    async fn send_paste(&self) -> Result<(), KeystrokeError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            use enigo::{Direction, Enigo, Key, Keyboard, Settings};

            #[cfg(target_os = "macos")]
            let modifier = Key::Meta;
            #[cfg(not(target_os = "macos"))]
            let modifier = Key::Control;

            let mut enigo = Enigo::new(&Settings::default()).map_err(|e| {
                KeystrokeError::PasteFailed(format!("Failed to create enigo: {}", e))
            })?;

            enigo
                .key(modifier, Direction::Press)
                .map_err(|e| KeystrokeError::PasteFailed(format!("Failed to press modifier: {}", e)))?;
            let result = enigo
                .key(Key::Unicode('v'), Direction::Click)
                .map_err(|e| KeystrokeError::PasteFailed(format!("Failed to press V: {}", e)));
            // Release the modifier even when the V press failed
            enigo
                .key(modifier, Direction::Release)
                .map_err(|e| KeystrokeError::PasteFailed(format!("Failed to release modifier: {}", e)))?;

            result
        })
        .await
        .map_err(|e| KeystrokeError::PasteFailed(format!("Task join error: {}", e)))?
    }
}
