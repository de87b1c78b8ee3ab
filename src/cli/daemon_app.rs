//! Daemon app runner

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::ports::{Clipboard, FocusProbe, PasteKeys, PickerSurface, SnapshotStore};
use crate::application::{
    ChangeNotifier, ClipboardHistoryUseCase, ClipboardWatcher, PasteInjector,
};
use crate::domain::focus::FocusContext;
use crate::domain::history::HistoryStore;
use crate::infrastructure::{
    create_focus_probe, create_paste_keys, ArboardClipboard, JsonSnapshotStore, NullPicker,
    PasteToolPreference,
};

use super::app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use super::args::DaemonOptions;
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{DaemonSignal, DaemonSignalHandler};
use super::socket::{DaemonSocketServer, SocketPath};

type DaemonUseCase = ClipboardHistoryUseCase<
    ArboardClipboard,
    Box<dyn PasteKeys>,
    Box<dyn FocusProbe>,
    JsonSnapshotStore,
>;

/// Run daemon mode
pub async fn run_daemon(options: DaemonOptions) -> ExitCode {
    let presenter = Presenter::new();
    init_tracing();

    // Acquire PID file
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another daemon is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Resolve paste tool
    let paste_tool = match options.paste_tool.parse::<PasteToolPreference>() {
        Ok(tool) => tool,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Create adapters
    let clipboard = ArboardClipboard::new();
    let snapshot = match &options.history_file {
        Some(path) => JsonSnapshotStore::with_path(path),
        None => JsonSnapshotStore::new(),
    };
    let injector = Arc::new(PasteInjector::new(
        create_paste_keys(paste_tool),
        create_focus_probe(),
        Duration::from_millis(options.settle_delay_ms),
        Duration::from_millis(options.paste_delay_ms),
    ));

    // External menu/UI collaborators hang off this single slot; the
    // daemon itself only traces the change stream.
    let notifier = Arc::new(ChangeNotifier::new());
    notifier.register(|change| {
        debug!("history changed: {}", change);
    });

    // Create use case
    let use_case: Arc<DaemonUseCase> = Arc::new(ClipboardHistoryUseCase::new(
        HistoryStore::with_capacity(options.capacity),
        clipboard,
        snapshot,
        injector,
        Arc::clone(&notifier),
    ));

    // Restore persisted history
    use_case.bootstrap().await;

    // Setup signal handler (returns handler + sender for socket server)
    let (mut signals, signal_tx) = match DaemonSignalHandler::new().await {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Setup socket server
    let socket_path = SocketPath::new();
    let mut socket_server = DaemonSocketServer::new(socket_path.clone());

    if let Err(e) = socket_server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    // Spawn socket server task
    {
        let use_case = Arc::clone(&use_case);
        let signal_tx = signal_tx.clone();
        tokio::spawn(async move {
            let _ = socket_server.run(signal_tx, use_case).await;
        });
    }

    // Start the clipboard sensor
    let watcher = ClipboardWatcher::new(
        Arc::clone(&use_case),
        Duration::from_millis(options.poll_interval_ms),
    );
    watcher.start();

    presenter.daemon_status("Started, watching clipboard...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | SIGINT: exit",
        std::process::id(),
        socket_path.path().display()
    ));

    // Main signal loop
    let picker = NullPicker::new();
    let focus_probe = create_focus_probe();
    let result = daemon_loop(&use_case, &picker, &focus_probe, &mut signals, &presenter).await;

    // Cleanup (socket server Drop will clean up socket file)
    watcher.stop();
    pid_file.release();

    if result {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clipstack=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn daemon_loop<C, K, F, S, P, FP>(
    use_case: &Arc<ClipboardHistoryUseCase<C, K, F, S>>,
    picker: &P,
    focus_probe: &FP,
    signals: &mut DaemonSignalHandler,
    presenter: &Presenter,
) -> bool
where
    C: Clipboard + Send + Sync + 'static,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore + Send + Sync + 'static,
    P: PickerSurface,
    FP: FocusProbe,
{
    // Most recent capture, overwritten per picker-open; a failed capture
    // keeps the previous value
    let mut focus_ctx: Option<FocusContext> = None;

    loop {
        match signals.recv().await {
            Some(DaemonSignal::ShowPicker) => {
                match focus_probe.capture().await {
                    Ok(Some(target)) => {
                        debug!(target = %target, "captured focus target");
                        focus_ctx = Some(target);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        debug!("focus capture failed: {}", e);
                    }
                }

                let entries = use_case.history().await;
                match picker.present(&entries).await {
                    Ok(Some(index)) => {
                        if !use_case.copy_and_paste(index, focus_ctx.clone()).await {
                            presenter.warn(&format!("Selection {} no longer exists", index));
                        }
                    }
                    Ok(None) => {
                        // Cancelled or focus lost; nothing to do
                    }
                    Err(e) => {
                        presenter.error(&format!("Picker failed: {}", e));
                    }
                }
            }
            Some(DaemonSignal::Shutdown) => {
                presenter.daemon_status("Shutting down...");
                return true;
            }
            None => {
                // Channel closed
                return false;
            }
        }
    }
}
