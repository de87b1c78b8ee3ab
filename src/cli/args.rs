//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// ClipStack - clipboard history daemon
#[derive(Parser, Debug)]
#[command(name = "clipstack")]
#[command(version)]
#[command(about = "Clipboard history daemon with best-effort paste re-injection")]
#[command(
    long_about = "Runs a background daemon that polls the clipboard, keeps a bounded \
deduplicated history, and can re-inject a previous item into the application \
that last held focus. With no subcommand the daemon runs in the foreground; \
subcommands talk to a running daemon over its control socket."
)]
pub struct Cli {
    /// Clipboard poll interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Maximum number of history entries to retain
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// History snapshot file path
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<String>,

    /// Paste delivery tool (enigo, none; Linux also: xdotool)
    #[arg(long, value_name = "TOOL")]
    pub paste_tool: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Send commands to a running daemon
    Daemon {
        #[command(subcommand)]
        action: DaemonAction,
    },
}

/// Config management actions
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set { key: String, value: String },
    /// Get a config value
    Get { key: String },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Daemon control actions
#[derive(Subcommand, Debug, Clone)]
pub enum DaemonAction {
    /// Check whether the daemon is running
    Status,
    /// Print the current history, most-recent-first, as JSON
    History,
    /// Print the top history entries as menu labels
    Menu,
    /// Copy text to the clipboard and record it in history
    Copy { text: String },
    /// Promote an entry, copy it, and attempt a paste into the last
    /// focused application
    Paste { index: usize },
    /// Open the picker surface
    Show,
    /// Clear the history
    Clear,
    /// Stop the running daemon
    Stop,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "capacity",
    "poll_interval_ms",
    "paste_delay_ms",
    "settle_delay_ms",
    "history_file",
    "paste_tool",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Resolved options for running the daemon
#[derive(Debug, Clone)]
pub struct DaemonOptions {
    pub capacity: usize,
    pub poll_interval_ms: u64,
    pub paste_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub history_file: Option<String>,
    pub paste_tool: String,
}
