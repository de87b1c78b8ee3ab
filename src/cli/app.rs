//! Shared app runner helpers

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::XdgConfigStore;

use super::args::{Cli, DaemonOptions};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Build the config layer contributed by CLI flags
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        capacity: cli.capacity,
        poll_interval_ms: cli.poll_interval,
        paste_delay_ms: None,
        settle_delay_ms: None,
        history_file: cli.history_file.clone(),
        paste_tool: cli.paste_tool.clone(),
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    merge_config(&XdgConfigStore::new(), cli_config).await
}

/// Merge: defaults < file < cli
pub(crate) async fn merge_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Resolve daemon options from a merged config
pub fn daemon_options(config: &AppConfig) -> DaemonOptions {
    DaemonOptions {
        capacity: config.capacity_or_default(),
        poll_interval_ms: config.poll_interval_ms_or_default(),
        paste_delay_ms: config.paste_delay_ms_or_default(),
        settle_delay_ms: config.settle_delay_ms_or_default(),
        history_file: config.history_file.clone(),
        paste_tool: config.paste_tool_or_default().to_string(),
    }
}
