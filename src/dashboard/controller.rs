use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use log::info;
use tokio::sync::{watch, Mutex};

use crate::api::{HistoryFetch, HttpHistoryClient};
use crate::config::DashboardConfig;
use crate::models::{Entry, Reading};
use crate::poll::{PollObserver, PollState, PollSynchronizer};

use super::shared::{SharedHistory, ViewModel};

/// Injected session state from the authentication collaborator. Explicit, not
/// ambient: the controller is a function of what it is handed here.
#[derive(Debug, Clone)]
pub struct SessionContext {
    token: Option<String>,
}

impl SessionContext {
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Orchestrates the dashboard: manual "analyze" submissions, the poll
/// synchronizer lifecycle, and the published view model.
pub struct DashboardController {
    session: SessionContext,
    config: DashboardConfig,
    shared: SharedHistory,
    poller: Mutex<PollSynchronizer>,
}

impl DashboardController {
    pub fn new(session: SessionContext, config: DashboardConfig) -> Self {
        let shared = SharedHistory::new(config.normal_ranges);
        let poller = Mutex::new(PollSynchronizer::new(config.poll_interval()));
        Self {
            session,
            config,
            shared,
            poller,
        }
    }

    /// Begin polling the remote store with the configured HTTP client.
    ///
    /// Fails closed without a session token: the view model stays empty and no
    /// fetch is attempted.
    pub async fn start_polling(&self) -> Result<()> {
        let Some(token) = self.session.token() else {
            info!("no session token; dashboard renders empty without fetching");
            return Ok(());
        };

        let fetcher = HttpHistoryClient::new(
            self.config.base_url.clone(),
            token,
            self.config.normal_ranges,
        )?;
        self.start_polling_with(Arc::new(fetcher), None).await
    }

    /// Same lifecycle with a caller-supplied fetcher and failure observer.
    pub async fn start_polling_with(
        &self,
        fetcher: Arc<dyn HistoryFetch>,
        observer: Option<PollObserver>,
    ) -> Result<()> {
        if !self.session.is_authenticated() {
            info!("no session token; dashboard renders empty without fetching");
            return Ok(());
        }
        self.poller
            .lock()
            .await
            .start(fetcher, self.shared.clone(), observer)
            .await
    }

    pub async fn stop_polling(&self) -> Result<()> {
        self.poller.lock().await.stop().await
    }

    pub async fn is_polling(&self) -> bool {
        self.poller.lock().await.is_active()
    }

    pub async fn poll_state(&self) -> PollState {
        self.poller.lock().await.state().await
    }

    /// Optimistic manual submission. Rejected silently (no entry created) when
    /// the session is unauthenticated or no parameter carries a value;
    /// otherwise the speculative entry is visible in the view model before any
    /// round trip.
    pub async fn submit_manual_reading(&self, reading: Reading) -> Option<Entry> {
        if !self.session.is_authenticated() {
            return None;
        }
        if !reading.has_any_value() {
            return None;
        }
        Some(self.shared.add_speculative(reading, Utc::now()).await)
    }

    pub fn view_model(&self) -> ViewModel {
        self.shared.view_model()
    }

    /// Rendering-layer boundary: redraw on every change notification.
    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.shared.subscribe()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}
