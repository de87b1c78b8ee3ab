//! macOS focus probe using osascript
//!
//! Captures the bundle identifier of the frontmost application via System
//! Events and re-activates it later by bundle id. Requires the host to be
//! granted Automation/Accessibility permission; a denial surfaces as a
//! capture or activation error, which callers treat as non-fatal.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FocusError, FocusProbe};
use crate::domain::focus::FocusContext;

/// Bundle identifier of the host's own surfaces, excluded from capture
const HOST_BUNDLE_ID: &str = "com.clipstack.app";

/// macOS focus probe backed by osascript
pub struct OsascriptFocusProbe;

impl OsascriptFocusProbe {
    /// Create a new osascript focus probe
    pub fn new() -> Self {
        Self
    }

    async fn run_script(script: &str) -> Result<String, String> {
        let output = Command::new("osascript")
            .args(["-e", script])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| e.to_string())?;

        if !output.status.success() {
            return Err(format!("osascript exited with status: {}", output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for OsascriptFocusProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FocusProbe for OsascriptFocusProbe {
    async fn capture(&self) -> Result<Option<FocusContext>, FocusError> {
        let script = r#"tell application "System Events" to get bundle identifier of first application process whose frontmost is true"#;

        let bundle_id = Self::run_script(script)
            .await
            .map_err(FocusError::CaptureFailed)?;

        if bundle_id.is_empty() || bundle_id == HOST_BUNDLE_ID {
            return Ok(None);
        }

        Ok(Some(FocusContext::new(bundle_id)))
    }

    async fn activate(&self, target: &FocusContext) -> Result<(), FocusError> {
        // Bundle ids come from System Events; quotes are stripped rather
        // than escaped to keep the script well-formed.
        let bundle_id: String = target.as_str().chars().filter(|c| *c != '"').collect();
        let script = format!(r#"tell application id "{}" to activate"#, bundle_id);

        Self::run_script(&script)
            .await
            .map(|_| ())
            .map_err(|message| FocusError::ActivateFailed {
                target: target.to_string(),
                message,
            })
    }

    fn supports_refocus(&self) -> bool {
        true
    }
}
