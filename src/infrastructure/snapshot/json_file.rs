//! JSON file snapshot store

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{SnapshotError, SnapshotStore};
use crate::domain::history::ClipboardEntry;

/// JSON-file snapshot of the history list.
///
/// The on-disk form is an ordered array of `{content, timestamp}`
/// records, most-recent-first. The file is overwritten whole on every
/// save; the payload is small and mutation frequency is bounded by user
/// and clipboard activity, so no batching is needed.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a snapshot store at the default XDG data path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("clipstack");

        Self {
            path: data_dir.join("history.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the snapshot file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for JsonSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn load(&self) -> Result<Vec<ClipboardEntry>, SnapshotError> {
        if !self.path.exists() {
            // First run: nothing persisted yet
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SnapshotError::ReadError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| SnapshotError::ParseError(e.to_string()))
    }

    async fn save(&self, entries: &[ClipboardEntry]) -> Result<(), SnapshotError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapshotError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| SnapshotError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| SnapshotError::WriteError(e.to_string()))?;

        Ok(())
    }
}
