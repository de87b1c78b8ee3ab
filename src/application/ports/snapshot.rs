//! History snapshot port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::ClipboardEntry;

/// Snapshot persistence errors
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    #[error("Failed to read history snapshot: {0}")]
    ReadError(String),

    #[error("Failed to parse history snapshot: {0}")]
    ParseError(String),

    #[error("Failed to write history snapshot: {0}")]
    WriteError(String),
}

/// Port for durable storage of the history list.
///
/// The snapshot is read once at startup and overwritten synchronously on
/// every mutation. Both directions degrade: the use case treats a load
/// failure as an empty list and a save failure as logged-and-ignored.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the persisted entries, most-recent-first.
    ///
    /// A missing snapshot file is not an error; it yields an empty list.
    async fn load(&self) -> Result<Vec<ClipboardEntry>, SnapshotError>;

    /// Serialize and overwrite the snapshot with the full list.
    async fn save(&self, entries: &[ClipboardEntry]) -> Result<(), SnapshotError>;
}

/// Blanket implementation for boxed snapshot stores
#[async_trait]
impl SnapshotStore for Box<dyn SnapshotStore> {
    async fn load(&self) -> Result<Vec<ClipboardEntry>, SnapshotError> {
        self.as_ref().load().await
    }

    async fn save(&self, entries: &[ClipboardEntry]) -> Result<(), SnapshotError> {
        self.as_ref().save(entries).await
    }
}
