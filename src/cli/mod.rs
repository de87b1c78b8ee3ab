//! Command-line interface layer

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod daemon_app;
pub mod daemon_cmd;
pub mod pid_file;
pub mod presenter;
pub mod signals;
pub mod socket;

pub use app::{cli_config, daemon_options, load_merged_config, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, DaemonAction, DaemonOptions};
pub use config_cmd::handle_config_command;
pub use daemon_app::run_daemon;
pub use daemon_cmd::handle_daemon_command;
pub use presenter::Presenter;
