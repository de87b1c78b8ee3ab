//! Paste delivery use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::focus::FocusContext;

use super::ports::{FocusProbe, PasteKeys};

/// Best-effort delivery of a paste command to a target application.
///
/// The selected content is already on the system clipboard by the time
/// `deliver` runs; this component only re-focuses the target (where the
/// platform supports it) and sends the paste chord. Every failure mode
/// degrades to "clipboard updated, paste not delivered" - nothing here
/// ever propagates an error to the caller.
pub struct PasteInjector<K, F>
where
    K: PasteKeys,
    F: FocusProbe,
{
    keys: K,
    focus: F,
    /// Pause after refocusing the target, before the paste chord
    settle_delay: Duration,
    /// Pause before a direct global paste, so the chord cannot race the
    /// OS clipboard write
    paste_delay: Duration,
    in_flight: AtomicBool,
}

impl<K, F> PasteInjector<K, F>
where
    K: PasteKeys,
    F: FocusProbe,
{
    pub fn new(keys: K, focus: F, settle_delay: Duration, paste_delay: Duration) -> Self {
        Self {
            keys,
            focus,
            settle_delay,
            paste_delay,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Deliver one paste attempt.
    ///
    /// At most one automation sequence runs at a time; a request arriving
    /// while another is in flight is dropped. There is no cancellation:
    /// once started, a sequence runs to completion or failure.
    pub async fn deliver(&self, target: Option<FocusContext>) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("paste automation already in flight, dropping request");
            return;
        }

        self.run(target).await;
        self.in_flight.store(false, Ordering::SeqCst);
    }

    async fn run(&self, target: Option<FocusContext>) {
        match target {
            Some(target) if self.focus.supports_refocus() => {
                debug!(target = %target, "refocusing target application for paste");
                if let Err(e) = self.focus.activate(&target).await {
                    warn!("paste automation failed: {}", e);
                    return;
                }
                tokio::time::sleep(self.settle_delay).await;
                if let Err(e) = self.keys.send_paste().await {
                    warn!("paste automation failed: {}", e);
                }
            }
            _ => {
                // No tracked target, or no refocus automation on this
                // platform: paste into whatever currently holds focus.
                tokio::time::sleep(self.paste_delay).await;
                if let Err(e) = self.keys.send_paste().await {
                    warn!("direct paste failed: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{FocusError, KeystrokeError};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[derive(Default)]
    struct CountingKeys {
        pastes: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl PasteKeys for Arc<CountingKeys> {
        async fn send_paste(&self) -> Result<(), KeystrokeError> {
            self.pastes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(KeystrokeError::PasteFailed("denied".into()));
            }
            Ok(())
        }
    }

    struct RecordingFocus {
        refocus: bool,
        activations: AtomicUsize,
        fail_activate: bool,
    }

    impl RecordingFocus {
        fn new(refocus: bool) -> Self {
            Self {
                refocus,
                activations: AtomicUsize::new(0),
                fail_activate: false,
            }
        }
    }

    #[async_trait]
    impl FocusProbe for Arc<RecordingFocus> {
        async fn capture(&self) -> Result<Option<FocusContext>, FocusError> {
            Ok(None)
        }

        async fn activate(&self, target: &FocusContext) -> Result<(), FocusError> {
            self.activations.fetch_add(1, Ordering::SeqCst);
            if self.fail_activate {
                return Err(FocusError::ActivateFailed {
                    target: target.to_string(),
                    message: "denied".into(),
                });
            }
            Ok(())
        }

        fn supports_refocus(&self) -> bool {
            self.refocus
        }
    }

    fn injector(
        keys: Arc<CountingKeys>,
        focus: Arc<RecordingFocus>,
    ) -> PasteInjector<Arc<CountingKeys>, Arc<RecordingFocus>> {
        PasteInjector::new(keys, focus, Duration::from_millis(0), Duration::from_millis(0))
    }

    #[tokio::test]
    async fn direct_paste_without_target() {
        let keys = Arc::new(CountingKeys::default());
        let focus = Arc::new(RecordingFocus::new(true));
        let injector = injector(Arc::clone(&keys), Arc::clone(&focus));

        injector.deliver(None).await;

        assert_eq!(keys.pastes.load(Ordering::SeqCst), 1);
        assert_eq!(focus.activations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn refocus_branch_activates_target_then_pastes() {
        let keys = Arc::new(CountingKeys::default());
        let focus = Arc::new(RecordingFocus::new(true));
        let injector = injector(Arc::clone(&keys), Arc::clone(&focus));

        injector
            .deliver(Some(FocusContext::new("com.example.editor")))
            .await;

        assert_eq!(focus.activations.load(Ordering::SeqCst), 1);
        assert_eq!(keys.pastes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn target_without_refocus_support_uses_direct_branch() {
        let keys = Arc::new(CountingKeys::default());
        let focus = Arc::new(RecordingFocus::new(false));
        let injector = injector(Arc::clone(&keys), Arc::clone(&focus));

        injector
            .deliver(Some(FocusContext::new("com.example.editor")))
            .await;

        assert_eq!(focus.activations.load(Ordering::SeqCst), 0);
        assert_eq!(keys.pastes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn activation_failure_skips_paste_and_does_not_propagate() {
        let keys = Arc::new(CountingKeys::default());
        let focus = Arc::new(RecordingFocus {
            refocus: true,
            activations: AtomicUsize::new(0),
            fail_activate: true,
        });
        let injector = injector(Arc::clone(&keys), Arc::clone(&focus));

        injector
            .deliver(Some(FocusContext::new("com.example.editor")))
            .await;

        assert_eq!(keys.pastes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn paste_failure_is_swallowed() {
        let keys = Arc::new(CountingKeys {
            pastes: AtomicUsize::new(0),
            fail: true,
        });
        let focus = Arc::new(RecordingFocus::new(false));
        let injector = injector(Arc::clone(&keys), Arc::clone(&focus));

        injector.deliver(None).await;

        assert_eq!(keys.pastes.load(Ordering::SeqCst), 1);
    }

    struct BlockingKeys {
        started: Arc<Notify>,
        release: Arc<Notify>,
        pastes: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PasteKeys for Arc<BlockingKeys> {
        async fn send_paste(&self) -> Result<(), KeystrokeError> {
            self.started.notify_one();
            self.release.notified().await;
            self.pastes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn second_request_while_in_flight_is_dropped() {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let pastes = Arc::new(AtomicUsize::new(0));
        let keys = Arc::new(BlockingKeys {
            started: Arc::clone(&started),
            release: Arc::clone(&release),
            pastes: Arc::clone(&pastes),
        });
        let focus = Arc::new(RecordingFocus::new(false));
        let injector = Arc::new(PasteInjector::new(
            keys,
            focus,
            Duration::from_millis(0),
            Duration::from_millis(0),
        ));

        let first = {
            let injector = Arc::clone(&injector);
            tokio::spawn(async move { injector.deliver(None).await })
        };
        // Wait until the first delivery is inside the paste chord
        started.notified().await;

        // This one must be dropped, not queued
        injector.deliver(None).await;

        release.notify_one();
        first.await.unwrap();

        assert_eq!(pastes.load(Ordering::SeqCst), 1);
    }
}
