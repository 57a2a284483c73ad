//! Errors raised while retrieving the BTC/USD spot price.

use thiserror::Error;

/// Why a spot price could not be obtained.
///
/// Every variant is shown to the user as the same message, see
/// [`crate::spot_rate::RATE_NOT_RECEIVED`]. The distinction only matters for logs.
#[derive(Error, Debug)]
pub enum SpotPriceError {
    /// The request could not be sent, timed out, or came back with a non-success status.
    #[error("spot price request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body did not have the expected shape or carried an unusable amount.
    #[error("malformed spot price response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SpotPriceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
