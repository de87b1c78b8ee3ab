//! Daemon command handler - sends commands to running daemon via its socket

use super::args::DaemonAction;
use super::presenter::Presenter;
use super::socket::{copy_command, DaemonSocketClient, SocketPath};

/// Handle daemon subcommand
pub async fn handle_daemon_command(
    action: DaemonAction,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = DaemonSocketClient::new(SocketPath::new());

    // Check if daemon is running
    if !client.is_daemon_running() {
        return Err("No daemon running. Start with: clipstack".to_string());
    }

    let cmd = match &action {
        DaemonAction::Status => "status".to_string(),
        DaemonAction::History => "history".to_string(),
        DaemonAction::Menu => "menu".to_string(),
        DaemonAction::Copy { text } => copy_command(text),
        DaemonAction::Paste { index } => format!("paste {}", index),
        DaemonAction::Show => "show".to_string(),
        DaemonAction::Clear => "clear".to_string(),
        DaemonAction::Stop => "stop".to_string(),
    };

    let response = client
        .send_command(&cmd)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    let response = response.trim();

    if let Some(stripped) = response.strip_prefix("error:") {
        return Err(stripped.trim().to_string());
    }

    match action {
        DaemonAction::Status => presenter.info(&format!("Daemon status: {}", response)),
        DaemonAction::History | DaemonAction::Menu => presenter.output(response),
        _ => presenter.success(&format!("Command sent: {}", cmd)),
    }

    Ok(())
}
