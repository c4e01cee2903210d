//! Errors raised while fetching a page.

use thiserror::Error;

/// The one message shown to users for any fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to load artworks. Please try again later.";

/// Why a page fetch failed.
///
/// Variants exist for logging only; every one of them is surfaced to users
/// as the same [`FETCH_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Failed to fetch artworks: HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected `{ data, pagination }` shape
    #[error("Failed to decode artworks response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configured base URL could not be turned into a request URL
    #[error("Invalid artworks URL '{url}'")]
    InvalidUrl { url: String },
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Errors building the HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
