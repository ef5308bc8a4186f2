use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PollStatus {
    Idle,
    Polling,
}

impl Default for PollStatus {
    fn default() -> Self {
        PollStatus::Idle
    }
}

/// Observable state of the poll synchronizer.
///
/// `generation` increases monotonically on every start and stop; a fetch
/// result tagged with an older generation is stale and never applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollState {
    pub status: PollStatus,
    pub generation: u64,
    pub cycles_started: u64,
    pub consecutive_failures: u32,
    pub last_polled_at: Option<DateTime<Utc>>,
    pub last_success_at: Option<DateTime<Utc>>,
}

impl Default for PollState {
    fn default() -> Self {
        Self {
            status: PollStatus::Idle,
            generation: 0,
            cycles_started: 0,
            consecutive_failures: 0,
            last_polled_at: None,
            last_success_at: None,
        }
    }
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_cycle(&mut self, now: DateTime<Utc>) {
        self.status = PollStatus::Polling;
        self.cycles_started += 1;
        self.last_polled_at = Some(now);
    }

    pub fn complete_success(&mut self, now: DateTime<Utc>) {
        self.status = PollStatus::Idle;
        self.consecutive_failures = 0;
        self.last_success_at = Some(now);
    }

    /// Failures are not fatal; the loop stays on schedule with the
    /// last-known-good history still displayed.
    pub fn complete_failure(&mut self) {
        self.status = PollStatus::Idle;
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn reset_idle(&mut self) {
        self.status = PollStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_transitions_idle_polling_idle() {
        let mut state = PollState::new();
        assert_eq!(state.status, PollStatus::Idle);

        let now = Utc::now();
        state.begin_cycle(now);
        assert_eq!(state.status, PollStatus::Polling);
        assert_eq!(state.cycles_started, 1);

        state.complete_success(now);
        assert_eq!(state.status, PollStatus::Idle);
        assert_eq!(state.consecutive_failures, 0);
        assert_eq!(state.last_success_at, Some(now));
    }

    #[test]
    fn failures_accumulate_until_a_success() {
        let mut state = PollState::new();
        let now = Utc::now();

        state.begin_cycle(now);
        state.complete_failure();
        state.begin_cycle(now);
        state.complete_failure();
        assert_eq!(state.consecutive_failures, 2);
        assert_eq!(state.last_success_at, None);

        state.begin_cycle(now);
        state.complete_success(now);
        assert_eq!(state.consecutive_failures, 0);
    }
}
