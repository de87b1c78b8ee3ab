//! History persistence integration tests
//!
//! Exercises the use case against the real JSON snapshot store, with the
//! clipboard stubbed out so no display server is needed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::tempdir;

use clipstack::application::ports::{Clipboard, ClipboardError};
use clipstack::application::{ChangeNotifier, ClipboardHistoryUseCase, PasteInjector};
use clipstack::domain::history::HistoryStore;
use clipstack::infrastructure::{
    create_focus_probe, create_paste_keys, JsonSnapshotStore, PasteToolPreference,
};

/// Shared handle onto one fake system clipboard; clones observe the
/// same contents, like processes sharing the real one.
#[derive(Clone, Default)]
struct StubClipboard {
    text: Arc<Mutex<String>>,
}

impl StubClipboard {
    fn set(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }
}

#[async_trait]
impl Clipboard for StubClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(self.text.lock().unwrap().clone())
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.text.lock().unwrap() = text.to_string();
        Ok(())
    }
}

fn use_case(
    clipboard: StubClipboard,
    snapshot_path: &std::path::Path,
    capacity: usize,
) -> ClipboardHistoryUseCase<
    StubClipboard,
    Box<dyn clipstack::application::ports::PasteKeys>,
    Box<dyn clipstack::application::ports::FocusProbe>,
    JsonSnapshotStore,
> {
    let injector = Arc::new(PasteInjector::new(
        create_paste_keys(PasteToolPreference::None),
        create_focus_probe(),
        Duration::from_millis(0),
        Duration::from_millis(0),
    ));
    ClipboardHistoryUseCase::new(
        HistoryStore::with_capacity(capacity),
        clipboard,
        JsonSnapshotStore::with_path(snapshot_path),
        injector,
        Arc::new(ChangeNotifier::new()),
    )
}

#[tokio::test]
async fn history_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let clipboard = StubClipboard::default();

    {
        let uc = use_case(clipboard.clone(), &path, 30);
        uc.bootstrap().await;
        clipboard.set("first");
        uc.observe_tick().await;
        clipboard.set("second");
        uc.observe_tick().await;
    }

    let uc = use_case(clipboard.clone(), &path, 30);
    uc.bootstrap().await;

    let contents: Vec<String> = uc
        .history()
        .await
        .into_iter()
        .map(|e| e.content)
        .collect();
    assert_eq!(contents, vec!["second", "first"]);
}

#[tokio::test]
async fn restart_with_smaller_capacity_drops_oldest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let clipboard = StubClipboard::default();

    {
        let uc = use_case(clipboard.clone(), &path, 30);
        uc.bootstrap().await;
        for i in 0..5 {
            clipboard.set(&format!("item {}", i));
            uc.observe_tick().await;
        }
    }

    let uc = use_case(clipboard.clone(), &path, 3);
    uc.bootstrap().await;

    let contents: Vec<String> = uc
        .history()
        .await
        .into_iter()
        .map(|e| e.content)
        .collect();
    assert_eq!(contents, vec!["item 4", "item 3", "item 2"]);
}

#[tokio::test]
async fn missing_snapshot_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nonexistent.json");
    let clipboard = StubClipboard::default();

    let uc = use_case(clipboard, &path, 30);
    uc.bootstrap().await;

    assert!(uc.history().await.is_empty());
}

#[tokio::test]
async fn corrupt_snapshot_file_starts_empty_and_recovers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();
    let clipboard = StubClipboard::default();

    let uc = use_case(clipboard.clone(), &path, 30);
    uc.bootstrap().await;
    assert!(uc.history().await.is_empty());

    // The next mutation overwrites the corrupt file
    clipboard.set("fresh");
    uc.observe_tick().await;

    let uc = use_case(clipboard, &path, 30);
    uc.bootstrap().await;
    let contents: Vec<String> = uc
        .history()
        .await
        .into_iter()
        .map(|e| e.content)
        .collect();
    assert_eq!(contents, vec!["fresh"]);
}

#[tokio::test]
async fn clear_persists_an_empty_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let clipboard = StubClipboard::default();

    {
        let uc = use_case(clipboard.clone(), &path, 30);
        uc.bootstrap().await;
        clipboard.set("gone soon");
        uc.observe_tick().await;
        uc.clear().await;
    }

    let uc = use_case(clipboard, &path, 30);
    uc.bootstrap().await;
    assert!(uc.history().await.is_empty());
}
