//! Typed failure taxonomy for the remote store boundary.
//!
//! Every variant is recoverable: the poll loop logs it, keeps the
//! last-known-good history, and stays on its schedule.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body did not decode as a reading history.
    #[error("invalid response: {0}")]
    Decode(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
