//! Clipboard polling sensor

use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::history::ClipboardHistoryUseCase;
use super::ports::{Clipboard, FocusProbe, PasteKeys, SnapshotStore};

/// Fixed-interval clipboard polling loop.
///
/// Polling is deliberate: native clipboard-change notification APIs are
/// not available on every target platform, and one scheduled read per
/// tick is cheap. Dedup against the last observed value lives in the use
/// case, which also updates that marker for program-initiated writes.
pub struct ClipboardWatcher<C, K, F, S>
where
    C: Clipboard + Send + Sync + 'static,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore + Send + Sync + 'static,
{
    use_case: Arc<ClipboardHistoryUseCase<C, K, F, S>>,
    poll_interval: Duration,
    task: StdMutex<Option<JoinHandle<()>>>,
}

impl<C, K, F, S> ClipboardWatcher<C, K, F, S>
where
    C: Clipboard + Send + Sync + 'static,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore + Send + Sync + 'static,
{
    pub fn new(
        use_case: Arc<ClipboardHistoryUseCase<C, K, F, S>>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            use_case,
            poll_interval,
            task: StdMutex::new(None),
        }
    }

    /// Start the polling loop. Idempotent: a second start while running
    /// does nothing.
    pub fn start(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if task.is_some() {
            return;
        }

        let use_case = Arc::clone(&self.use_case);
        let poll_interval = self.poll_interval;
        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                use_case.observe_tick().await;
            }
        }));
        debug!(interval_ms = poll_interval.as_millis() as u64, "clipboard watcher started");
    }

    /// Cancel the polling loop. Safe to call when not running.
    pub fn stop(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = task.take() {
            handle.abort();
            debug!("clipboard watcher stopped");
        }
    }

    /// Whether the polling loop is currently scheduled
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl<C, K, F, S> Drop for ClipboardWatcher<C, K, F, S>
where
    C: Clipboard + Send + Sync + 'static,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notify::ChangeNotifier;
    use crate::application::paste::PasteInjector;
    use crate::application::ports::{
        ClipboardError, FocusError, KeystrokeError, SnapshotError,
    };
    use crate::domain::focus::FocusContext;
    use crate::domain::history::{ClipboardEntry, HistoryStore};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct SequenceClipboard {
        values: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl Clipboard for Arc<SequenceClipboard> {
        async fn read_text(&self) -> Result<String, ClipboardError> {
            let mut values = self.values.lock().unwrap();
            if values.is_empty() {
                return Err(ClipboardError::ReadFailed("empty".into()));
            }
            Ok(values.remove(0).to_string())
        }

        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    struct NoKeys;

    #[async_trait]
    impl PasteKeys for NoKeys {
        async fn send_paste(&self) -> Result<(), KeystrokeError> {
            Ok(())
        }
    }

    struct NoFocus;

    #[async_trait]
    impl FocusProbe for NoFocus {
        async fn capture(&self) -> Result<Option<FocusContext>, FocusError> {
            Ok(None)
        }

        async fn activate(&self, _target: &FocusContext) -> Result<(), FocusError> {
            Ok(())
        }

        fn supports_refocus(&self) -> bool {
            false
        }
    }

    struct NoSnapshot;

    #[async_trait]
    impl SnapshotStore for NoSnapshot {
        async fn load(&self) -> Result<Vec<ClipboardEntry>, SnapshotError> {
            Ok(Vec::new())
        }

        async fn save(&self, _entries: &[ClipboardEntry]) -> Result<(), SnapshotError> {
            Ok(())
        }
    }

    type TestWatcher = ClipboardWatcher<Arc<SequenceClipboard>, NoKeys, NoFocus, NoSnapshot>;

    fn watcher(
        clipboard: Arc<SequenceClipboard>,
        poll_interval: Duration,
    ) -> (
        TestWatcher,
        Arc<ClipboardHistoryUseCase<Arc<SequenceClipboard>, NoKeys, NoFocus, NoSnapshot>>,
    ) {
        let injector = Arc::new(PasteInjector::new(
            NoKeys,
            NoFocus,
            Duration::from_millis(0),
            Duration::from_millis(0),
        ));
        let use_case = Arc::new(ClipboardHistoryUseCase::new(
            HistoryStore::new(),
            clipboard,
            NoSnapshot,
            injector,
            Arc::new(ChangeNotifier::new()),
        ));
        (
            ClipboardWatcher::new(Arc::clone(&use_case), poll_interval),
            use_case,
        )
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let clipboard = Arc::new(SequenceClipboard::default());
        let (watcher, _) = watcher(clipboard, Duration::from_secs(60));

        watcher.start();
        watcher.start();

        assert!(watcher.is_running());
        watcher.stop();
    }

    #[tokio::test]
    async fn stop_without_start_is_safe() {
        let clipboard = Arc::new(SequenceClipboard::default());
        let (watcher, _) = watcher(clipboard, Duration::from_secs(60));

        watcher.stop();
        watcher.stop();

        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn stop_cancels_the_scheduled_loop() {
        let clipboard = Arc::new(SequenceClipboard::default());
        let (watcher, _) = watcher(clipboard, Duration::from_secs(60));

        watcher.start();
        assert!(watcher.is_running());
        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn ticks_feed_observed_values_into_history() {
        let clipboard = Arc::new(SequenceClipboard {
            values: Mutex::new(vec!["one", "two"]),
        });
        let (watcher, use_case) = watcher(Arc::clone(&clipboard), Duration::from_millis(5));

        watcher.start();
        for _ in 0..100 {
            if use_case.history().await.len() == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        watcher.stop();

        let history = use_case.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "two");
        assert_eq!(history[1].content, "one");
    }
}
