pub mod controller;
pub mod loop_worker;
pub mod state;

pub use controller::{PollObserver, PollSynchronizer, DEFAULT_POLL_INTERVAL_MS};
pub use state::{PollState, PollStatus};
