pub mod client;
pub mod error;
pub mod types;

pub use client::HttpHistoryClient;
pub use error::{FetchError, FetchResult};
pub use types::RawSoilEntry;

use async_trait::async_trait;

use crate::models::Entry;

/// Boundary with the remote reading store. The poll loop only sees this trait;
/// tests substitute scripted fakes for the HTTP client.
#[async_trait]
pub trait HistoryFetch: Send + Sync {
    /// Fetch the full authoritative history for the authenticated session.
    /// Order of the returned entries is unspecified; callers normalize.
    async fn fetch_history(&self) -> FetchResult<Vec<Entry>>;
}
