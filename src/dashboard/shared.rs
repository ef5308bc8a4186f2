//! Shared mutable history behind the dashboard.
//!
//! All mutations go through one mutex, so a manual submission, a poll
//! application, and a stop/restart can never interleave partially. The
//! generation gate is checked under that same lock: a fetch result carrying a
//! superseded generation is dropped without touching history.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use crate::classify::NormalRanges;
use crate::models::{Entry, Reading};
use crate::store::ReadingStore;

/// Render-ready projection of the history, recomputed after every store
/// mutation and published to subscribers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub latest_entry: Option<Entry>,
    pub history: Vec<Entry>,
}

impl ViewModel {
    fn from_store(store: &ReadingStore) -> Self {
        Self {
            latest_entry: store.latest().cloned(),
            history: store.snapshot(),
        }
    }
}

#[derive(Clone)]
pub struct SharedHistory {
    store: Arc<Mutex<ReadingStore>>,
    vm_tx: Arc<watch::Sender<ViewModel>>,
    generation: Arc<AtomicU64>,
}

impl SharedHistory {
    pub fn new(ranges: NormalRanges) -> Self {
        let (vm_tx, _vm_rx) = watch::channel(ViewModel::default());
        Self {
            store: Arc::new(Mutex::new(ReadingStore::new(ranges))),
            vm_tx: Arc::new(vm_tx),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.vm_tx.subscribe()
    }

    pub fn view_model(&self) -> ViewModel {
        self.vm_tx.borrow().clone()
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Invalidate all in-flight poll results and return the new generation.
    pub fn advance_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Like `advance_generation`, but holding the store lock so the bump
    /// serializes with any application already past its own generation check.
    pub async fn invalidate(&self) -> u64 {
        let _store = self.store.lock().await;
        self.advance_generation()
    }

    /// Install a fetched confirmed set, unless `generation` has been
    /// superseded in the meantime. Returns whether the set was applied.
    pub async fn apply_confirmed(&self, generation: u64, entries: Vec<Entry>) -> bool {
        let mut store = self.store.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        store.replace_confirmed(entries);
        self.publish(&store);
        true
    }

    pub async fn add_speculative(&self, reading: Reading, now: DateTime<Utc>) -> Entry {
        let mut store = self.store.lock().await;
        let entry = store.add_speculative(reading, now);
        self.publish(&store);
        entry
    }

    pub async fn snapshot(&self) -> Vec<Entry> {
        self.store.lock().await.snapshot()
    }

    fn publish(&self, store: &ReadingStore) {
        // send_replace updates the stored value even with no subscribers
        self.vm_tx.send_replace(ViewModel::from_store(store));
    }
}
