//! Clipboard history use case

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::focus::FocusContext;
use crate::domain::history::{ClipboardEntry, HistoryStore};

use super::notify::{ChangeNotifier, HistoryChange};
use super::paste::PasteInjector;
use super::ports::{Clipboard, FocusProbe, PasteKeys, SnapshotStore};

/// Menu rendering limits
const MENU_ITEM_LIMIT: usize = 10;
const MENU_LABEL_CHARS: usize = 30;

/// Core clipboard history service.
///
/// Owns the in-memory store, the "last observed" clipboard marker shared
/// between the polling sensor and program-initiated writes, and the
/// persistence/notification side effects of every mutation. All mutations
/// run under one async mutex, so readers always observe the most recent
/// completed mutation.
pub struct ClipboardHistoryUseCase<C, K, F, S>
where
    C: Clipboard,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore,
{
    store: Mutex<HistoryStore>,
    last_observed: Mutex<String>,
    clipboard: C,
    snapshot: S,
    injector: Arc<PasteInjector<K, F>>,
    notifier: Arc<ChangeNotifier>,
}

impl<C, K, F, S> ClipboardHistoryUseCase<C, K, F, S>
where
    C: Clipboard,
    K: PasteKeys + Send + Sync + 'static,
    F: FocusProbe + Send + Sync + 'static,
    S: SnapshotStore,
{
    pub fn new(
        store: HistoryStore,
        clipboard: C,
        snapshot: S,
        injector: Arc<PasteInjector<K, F>>,
        notifier: Arc<ChangeNotifier>,
    ) -> Self {
        Self {
            store: Mutex::new(store),
            last_observed: Mutex::new(String::new()),
            clipboard,
            snapshot,
            injector,
            notifier,
        }
    }

    /// Restore history from the snapshot file.
    ///
    /// Missing, unreadable, or malformed snapshots degrade to an empty
    /// history; nothing here is fatal.
    pub async fn bootstrap(&self) {
        let entries = match self.snapshot.load().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("history snapshot unreadable, starting fresh: {}", e);
                Vec::new()
            }
        };

        let mut store = self.store.lock().await;
        info!("loaded {} clipboard items from history", entries.len());
        store.restore(entries);
        drop(store);

        self.notifier.emit(HistoryChange::Loaded);
    }

    /// One poll tick of the clipboard sensor.
    ///
    /// Reads the clipboard and records the text when it is non-empty
    /// after trimming and differs from the last observed value. The
    /// last-observed marker is tracked independently of history, so the
    /// same text read on consecutive ticks never storms the store - even
    /// when it no longer matches the history head.
    pub async fn observe_tick(&self) {
        let text = match self.clipboard.read_text().await {
            Ok(text) => text,
            Err(e) => {
                // Transient: retried implicitly on the next tick
                debug!("clipboard read skipped: {}", e);
                return;
            }
        };

        if text.trim().is_empty() {
            return;
        }

        {
            let mut last = self.last_observed.lock().await;
            if *last == text {
                return;
            }
            *last = text.clone();
        }

        self.insert(text).await;
    }

    /// Current history, most-recent-first
    pub async fn history(&self) -> Vec<ClipboardEntry> {
        self.store.lock().await.entries().to_vec()
    }

    /// Write `content` to the system clipboard and record it as a fresh
    /// entry, exactly as if it had been copied externally.
    ///
    /// Returns whether the clipboard write succeeded.
    pub async fn copy_item(&self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }

        // Claim the marker before touching the clipboard: the OS side
        // becomes readable the moment the write lands, and a poll tick
        // in that window must not record our own write.
        self.mark_own_write(content).await;
        if let Err(e) = self.clipboard.write_text(content).await {
            warn!("clipboard write failed: {}", e);
            return false;
        }

        self.insert(content.to_string()).await;
        true
    }

    /// Promote the entry at `index`, put it on the system clipboard, and
    /// attempt a best-effort paste into `target` (or whatever holds focus
    /// when no target is known).
    ///
    /// Returns whether the index was valid - not whether the paste
    /// itself succeeded. The clipboard write always happens for a valid
    /// index, even when the subsequent paste delivery fails.
    pub async fn copy_and_paste(&self, index: usize, target: Option<FocusContext>) -> bool {
        let content = {
            let mut store = self.store.lock().await;
            if let Err(e) = store.promote(index) {
                debug!("promote rejected: {}", e);
                return false;
            }
            store
                .front()
                .map(|entry| entry.content.clone())
                .unwrap_or_default()
        };

        self.persist_and_notify(HistoryChange::Promoted).await;

        // Marker first, same as copy_item: a poll tick racing the write
        // must not re-record the promoted content.
        self.mark_own_write(&content).await;
        if let Err(e) = self.clipboard.write_text(&content).await {
            // Clipboard not updated, so no paste is attempted either
            warn!("clipboard write failed, paste skipped: {}", e);
            return true;
        }

        // Automation is blocking and may be slow; run it outside the
        // caller's scheduling slot so clipboard polling keeps ticking.
        let injector = Arc::clone(&self.injector);
        tokio::spawn(async move {
            injector.deliver(target).await;
        });

        true
    }

    /// Empty the history
    pub async fn clear(&self) {
        self.store.lock().await.clear();
        info!("clipboard history cleared");
        self.persist_and_notify(HistoryChange::Cleared).await;
    }

    /// Top entries rendered as selectable menu labels, longest first
    /// truncated with an ellipsis marker
    pub async fn menu_labels(&self) -> Vec<String> {
        let store = self.store.lock().await;
        store
            .entries()
            .iter()
            .take(MENU_ITEM_LIMIT)
            .map(|entry| truncate_label(&entry.content))
            .collect()
    }

    async fn insert(&self, content: String) {
        self.store.lock().await.insert(content);
        self.persist_and_notify(HistoryChange::Inserted).await;
    }

    /// Update the sensor's last-observed marker for a program-initiated
    /// clipboard write, so a poll tick never re-detects our own write as
    /// an external change. Called before the write is issued.
    async fn mark_own_write(&self, content: &str) {
        let mut last = self.last_observed.lock().await;
        *last = content.to_string();
    }

    /// Synchronous, unconditional snapshot write plus change emission.
    /// A save failure is logged; in-memory state stays authoritative.
    async fn persist_and_notify(&self, change: HistoryChange) {
        let entries = self.store.lock().await.entries().to_vec();
        if let Err(e) = self.snapshot.save(&entries).await {
            warn!("failed to save clipboard history: {}", e);
        }
        self.notifier.emit(change);
    }
}

/// Truncate a menu label to a fixed number of characters with `...`
fn truncate_label(content: &str) -> String {
    let mut chars = content.chars();
    let label: String = chars.by_ref().take(MENU_LABEL_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", label)
    } else {
        label
    }
}
