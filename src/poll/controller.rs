use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::api::{FetchError, HistoryFetch};
use crate::dashboard::shared::SharedHistory;

use super::loop_worker::{poll_loop, PollTask};
use super::state::PollState;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Callback invoked on every failed poll cycle.
pub type PollObserver = Arc<dyn Fn(&FetchError) + Send + Sync>;

/// Owns the recurring poll timer: restartable, cancellable.
///
/// Every start and stop advances the shared generation counter, so a fetch
/// still in flight when the synchronizer stops (or restarts) resolves into a
/// no-op instead of clobbering a fresher confirmed set.
pub struct PollSynchronizer {
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
    shared: Option<SharedHistory>,
    state: Arc<Mutex<PollState>>,
    period: Duration,
}

impl PollSynchronizer {
    pub fn new(period: Duration) -> Self {
        Self {
            handle: None,
            cancel_token: None,
            shared: None,
            state: Arc::new(Mutex::new(PollState::new())),
            period,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub async fn state(&self) -> PollState {
        self.state.lock().await.clone()
    }

    pub async fn start(
        &mut self,
        fetcher: Arc<dyn HistoryFetch>,
        shared: SharedHistory,
        observer: Option<PollObserver>,
    ) -> Result<()> {
        if self.handle.is_some() {
            bail!("polling already active");
        }

        let generation = shared.advance_generation();
        {
            let mut state = self.state.lock().await;
            state.generation = generation;
        }

        let cancel_token = CancellationToken::new();
        let task = PollTask {
            fetcher,
            shared: shared.clone(),
            state: self.state.clone(),
            generation,
            period: self.period,
            observer,
        };

        let handle = tokio::spawn(poll_loop(task, cancel_token.clone()));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        self.shared = Some(shared);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        // Bump the generation first, under the store lock, so an in-flight
        // fetch can no longer apply
        if let Some(shared) = self.shared.take() {
            shared.invalidate().await;
        }

        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle.await.context("poll loop task failed to join")?;
        }

        self.state.lock().await.reset_idle();
        Ok(())
    }
}
