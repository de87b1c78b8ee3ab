use std::process::ExitCode;

use clap::Parser;

use clipstack::cli::{
    cli_config, daemon_options, handle_config_command, handle_daemon_command, load_merged_config,
    run_daemon, Cli, Commands, Presenter, EXIT_ERROR, EXIT_SUCCESS,
};
use clipstack::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Config { ref action }) => {
            let store = XdgConfigStore::new();
            match handle_config_command(action.clone(), &store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Some(Commands::Daemon { ref action }) => {
            match handle_daemon_command(action.clone(), &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e);
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        None => {
            let config = load_merged_config(cli_config(&cli)).await;
            run_daemon(daemon_options(&config)).await
        }
    }
}
