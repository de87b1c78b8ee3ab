//! Single-instance guard for daemon mode
//!
//! The daemon records its PID next to the control socket and refuses to
//! start while the recorded PID names a live process. A stale file left
//! by a crashed daemon is removed when probed.

use std::fs;
use std::path::PathBuf;
use std::process;

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

/// PID file guard
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Create a guard at the default runtime path, preferring
    /// XDG_RUNTIME_DIR with temp_dir fallback
    pub fn new() -> Self {
        let path = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("clipstack.pid"))
            .unwrap_or_else(|_| std::env::temp_dir().join("clipstack.pid"));
        Self { path }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the PID file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn recorded_pid(&self) -> Option<u32> {
        fs::read_to_string(&self.path).ok()?.trim().parse().ok()
    }

    /// PID of a live daemon recorded in the file, if any.
    ///
    /// Liveness is probed with SIGCONT, which is harmless to a running
    /// daemon; ESRCH means the recorded process is gone and the stale
    /// file is removed.
    pub fn is_running(&self) -> Option<u32> {
        let pid = self.recorded_pid()?;
        match kill(Pid::from_raw(pid as i32), Signal::SIGCONT) {
            Ok(()) => Some(pid),
            Err(Errno::ESRCH) => {
                let _ = fs::remove_file(&self.path);
                None
            }
            // Permission errors and the like: assume not ours
            Err(_) => None,
        }
    }

    /// Record this process's PID, failing when another daemon is live
    pub fn acquire(&self) -> Result<(), PidFileError> {
        if let Some(pid) = self.is_running() {
            return Err(PidFileError::AlreadyRunning(pid));
        }

        fs::write(&self.path, process::id().to_string())
            .map_err(|e| PidFileError::RecordFailed(e.to_string()))
    }

    /// Remove the PID file; best-effort
    pub fn release(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl Default for PidFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        self.release();
    }
}

/// PID file errors
#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    #[error("Another daemon is already running (PID: {0})")]
    AlreadyRunning(u32),

    #[error("Failed to record daemon PID: {0}")]
    RecordFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_path_names_the_pid_file() {
        let pid_file = PidFile::new();
        assert!(pid_file.path().ends_with("clipstack.pid"));
    }

    #[test]
    fn is_running_returns_none_for_missing_file() {
        let dir = tempdir().unwrap();
        let pid_file = PidFile::with_path(dir.path().join("daemon.pid"));
        assert!(pid_file.is_running().is_none());
    }

    #[test]
    fn garbage_content_is_treated_as_not_running() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("daemon.pid");
        fs::write(&path, "not a pid").unwrap();
        let pid_file = PidFile::with_path(&path);

        assert!(pid_file.is_running().is_none());
    }

    #[test]
    fn acquire_records_own_pid_and_blocks_a_second_guard() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("daemon.pid");
        let first = PidFile::with_path(&path);

        first.acquire().unwrap();

        // The recorded PID is this (live) test process, so a second
        // guard sees a running daemon.
        let second = PidFile::with_path(&path);
        let err = second.acquire().unwrap_err();
        assert!(matches!(err, PidFileError::AlreadyRunning(pid) if pid == process::id()));
    }

    #[test]
    fn release_removes_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("daemon.pid");
        let pid_file = PidFile::with_path(&path);

        pid_file.acquire().unwrap();
        assert!(path.exists());
        pid_file.release();
        assert!(!path.exists());
    }
}
