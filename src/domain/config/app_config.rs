//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::history::DEFAULT_CAPACITY;

/// Default clipboard poll interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default delay between a clipboard write and a direct global paste
pub const DEFAULT_PASTE_DELAY_MS: u64 = 150;

/// Default settle delay after refocusing the target application
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub capacity: Option<usize>,
    pub poll_interval_ms: Option<u64>,
    pub paste_delay_ms: Option<u64>,
    pub settle_delay_ms: Option<u64>,
    pub history_file: Option<String>,
    pub paste_tool: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            paste_delay_ms: Some(DEFAULT_PASTE_DELAY_MS),
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            history_file: None,
            paste_tool: Some("enigo".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            capacity: other.capacity.or(self.capacity),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            paste_delay_ms: other.paste_delay_ms.or(self.paste_delay_ms),
            settle_delay_ms: other.settle_delay_ms.or(self.settle_delay_ms),
            history_file: other.history_file.or(self.history_file),
            paste_tool: other.paste_tool.or(self.paste_tool),
        }
    }

    pub fn capacity_or_default(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn poll_interval_ms_or_default(&self) -> u64 {
        self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS)
    }

    pub fn paste_delay_ms_or_default(&self) -> u64 {
        self.paste_delay_ms.unwrap_or(DEFAULT_PASTE_DELAY_MS)
    }

    pub fn settle_delay_ms_or_default(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS)
    }

    pub fn paste_tool_or_default(&self) -> &str {
        self.paste_tool.as_deref().unwrap_or("enigo")
    }
}
