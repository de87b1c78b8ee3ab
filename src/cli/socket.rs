//! Unix Domain Socket communication for daemon control

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

use crate::application::ports::{Clipboard, FocusProbe, PasteKeys, SnapshotStore};
use crate::application::ClipboardHistoryUseCase;

use super::signals::DaemonSignal;

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Create socket path, preferring XDG_RUNTIME_DIR with temp_dir fallback
    pub fn new() -> Self {
        let path = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("clipstack.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("clipstack.sock"));
        Self { path }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a `copy` command line. The payload is a JSON string, so
/// embedded newlines survive the line-oriented protocol.
pub fn copy_command(text: &str) -> String {
    format!("copy {}", serde_json::json!(text))
}

/// Daemon socket server.
///
/// History queries and mutations are served directly against the use
/// case; picker-open and shutdown are forwarded to the daemon loop over
/// the signal channel.
pub struct DaemonSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl DaemonSocketServer {
    /// Create a new socket server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }

    /// Bind to the socket
    pub fn bind(&mut self) -> io::Result<()> {
        // Remove stale socket file if it exists
        self.socket_path.cleanup()?;

        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        self.socket_path.path()
    }

    /// Accept and handle connections
    ///
    /// This runs in a loop, accepting connections and processing commands.
    pub async fn run<C, K, F, S>(
        &self,
        tx: mpsc::Sender<DaemonSignal>,
        use_case: Arc<ClipboardHistoryUseCase<C, K, F, S>>,
    ) -> io::Result<()>
    where
        C: Clipboard + Send + Sync + 'static,
        K: PasteKeys + Send + Sync + 'static,
        F: FocusProbe + Send + Sync + 'static,
        S: SnapshotStore + Send + Sync + 'static,
    {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let tx = tx.clone();
                    let use_case = Arc::clone(&use_case);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, tx, use_case).await {
                            tracing::warn!("socket connection error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("socket accept error: {}", e);
                }
            }
        }
    }

    /// Cleanup socket file
    pub fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

impl Drop for DaemonSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Handle a single client connection
async fn handle_connection<C, K, F, S>(
    stream: UnixStream,
    tx: mpsc::Sender<DaemonSignal>,
    use_case: Arc<ClipboardHistoryUseCase<C, K, F, S>>,
) -> io::Result<()>
where
    C: Clipboard + Send + Sync + 'static,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore + Send + Sync + 'static,
{
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    // Read command
    reader.read_line(&mut line).await?;
    let cmd = line.trim();

    // Process command
    let response = match cmd {
        "status" => "running\n".to_string(),
        "history" => {
            let entries = use_case.history().await;
            match serde_json::to_string(&entries) {
                Ok(json) => format!("{}\n", json),
                Err(e) => format!("error: {}\n", e),
            }
        }
        "menu" => {
            let labels = use_case.menu_labels().await;
            if labels.is_empty() {
                "(empty)\n".to_string()
            } else {
                format!("{}\n", labels.join("\n"))
            }
        }
        "clear" => {
            use_case.clear().await;
            "ok\n".to_string()
        }
        "show" => {
            let _ = tx.send(DaemonSignal::ShowPicker).await;
            "ok\n".to_string()
        }
        "stop" => {
            let _ = tx.send(DaemonSignal::Shutdown).await;
            "ok\n".to_string()
        }
        _ => {
            if let Some(payload) = cmd.strip_prefix("copy ") {
                // Payload is normally a JSON string (see `copy_command`);
                // bare text is accepted for hand-typed commands.
                let text = serde_json::from_str::<String>(payload)
                    .unwrap_or_else(|_| payload.to_string());
                if use_case.copy_item(&text).await {
                    "ok\n".to_string()
                } else {
                    "error: clipboard write failed\n".to_string()
                }
            } else if let Some(index) = cmd.strip_prefix("paste ") {
                match index.trim().parse::<usize>() {
                    // Direct command path: no picker was opened, so there
                    // is no captured focus target
                    Ok(index) => {
                        if use_case.copy_and_paste(index, None).await {
                            "ok\n".to_string()
                        } else {
                            format!("error: index {} out of range\n", index)
                        }
                    }
                    Err(_) => "error: paste expects a numeric index\n".to_string(),
                }
            } else {
                "error: unknown command\n".to_string()
            }
        }
    };

    writer.write_all(response.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Daemon socket client - connects and sends commands
pub struct DaemonSocketClient {
    socket_path: SocketPath,
}

impl DaemonSocketClient {
    /// Create a new socket client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }

    /// Check if daemon appears to be running (socket exists)
    pub fn is_daemon_running(&self) -> bool {
        self.socket_path.exists()
    }

    /// Send a command and receive the full response
    pub async fn send_command(&self, cmd: &str) -> io::Result<String> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        let (reader, mut writer) = stream.into_split();

        // Send command
        writer.write_all(format!("{}\n", cmd).as_bytes()).await?;
        writer.flush().await?;

        // Responses may span multiple lines (menu); read until EOF
        let mut reader = BufReader::new(reader);
        let mut response = String::new();
        reader.read_to_string(&mut response).await?;

        Ok(response)
    }
}
