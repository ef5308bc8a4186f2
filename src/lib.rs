//! Live soil sensor dashboard core.
//!
//! Polls an authoritative reading history from a remote store on a fixed
//! period, classifies each reading against per-parameter normal ranges, and
//! reconciles the server-confirmed history with speculative entries created
//! by manual submissions between polls, so a just-submitted reading never
//! disappears from the dashboard.

pub mod api;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod poll;
pub mod store;
mod utils;

pub use api::{FetchError, HistoryFetch, HttpHistoryClient};
pub use classify::{classify, NormalRanges, ParamRange};
pub use config::DashboardConfig;
pub use dashboard::{DashboardController, SessionContext, SharedHistory, ViewModel};
pub use models::{Classification, Entry, Parameter, Provenance, RangeState, Reading};
pub use poll::{PollObserver, PollState, PollStatus, PollSynchronizer};
pub use store::ReadingStore;

/// Initialize logging (reads RUST_LOG env var). Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
