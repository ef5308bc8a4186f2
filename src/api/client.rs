//! HTTP client for the remote reading store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use crate::classify::NormalRanges;
use crate::models::Entry;

use super::error::{FetchError, FetchResult};
use super::types::RawSoilEntry;
use super::HistoryFetch;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// `GET {base_url}/soil` with a bearer credential.
pub struct HttpHistoryClient {
    base_url: String,
    ranges: NormalRanges,
    client: Client,
}

impl HttpHistoryClient {
    pub fn new(base_url: impl Into<String>, token: &str, ranges: NormalRanges) -> FetchResult<Self> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| FetchError::Decode(format!("invalid bearer token: {err}")))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            ranges,
            client,
        })
    }
}

#[async_trait]
impl HistoryFetch for HttpHistoryClient {
    async fn fetch_history(&self) -> FetchResult<Vec<Entry>> {
        let url = format!("{}/soil", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(FetchError::Server {
                status: 401,
                message: "unauthorized".to_string(),
            });
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Server { status, message });
        }

        let rows: Vec<RawSoilEntry> = response.json().await?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_entry(&self.ranges))
            .collect())
    }
}
