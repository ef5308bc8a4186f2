use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::time::{self, Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::api::HistoryFetch;
use crate::dashboard::shared::SharedHistory;

use super::controller::PollObserver;
use super::state::PollState;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

// Import the logging macros (exported at crate root)
use crate::{log_error, log_info};

pub(crate) struct PollTask {
    pub fetcher: Arc<dyn HistoryFetch>,
    pub shared: SharedHistory,
    pub state: Arc<Mutex<PollState>>,
    pub generation: u64,
    pub period: Duration,
    pub observer: Option<PollObserver>,
}

/// Fixed-rate poll loop. The first cycle runs immediately; later cycles fire
/// on period boundaries. A fetch that overruns the period triggers exactly one
/// immediate catch-up cycle rather than a queued burst, and no new fetch
/// starts until the current one resolves or is abandoned, so a generation
/// never has two fetches in flight.
///
/// Cancellation races the cycle itself: a stuck fetch cannot delay teardown,
/// and an abandoned result is already a no-op behind the generation gate.
pub(crate) async fn poll_loop(task: PollTask, cancel_token: CancellationToken) {
    let mut next = Instant::now();

    loop {
        tokio::select! {
            _ = time::sleep_until(next) => {
                tokio::select! {
                    _ = run_cycle(&task) => {}
                    _ = cancel_token.cancelled() => {
                        log_info!("poll loop shutting down (generation {})", task.generation);
                        break;
                    }
                }

                let now = Instant::now();
                next += task.period;
                if next < now {
                    next = now;
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("poll loop shutting down (generation {})", task.generation);
                break;
            }
        }
    }
}

async fn run_cycle(task: &PollTask) {
    task.state.lock().await.begin_cycle(Utc::now());

    match task.fetcher.fetch_history().await {
        Ok(entries) => {
            if task.shared.apply_confirmed(task.generation, entries).await {
                task.state.lock().await.complete_success(Utc::now());
            } else {
                // Superseded while the fetch was in flight; not an error
                log_info!("discarding stale poll result (generation {})", task.generation);
                task.state.lock().await.reset_idle();
            }
        }
        Err(err) => {
            // History keeps its last-known-good contents; next tick is unaffected
            log_error!("history fetch failed: {err}");
            if let Some(observer) = &task.observer {
                observer(&err);
            }
            task.state.lock().await.complete_failure();
        }
    }
}
