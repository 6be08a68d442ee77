//! Error types for outbound rate fetches.

use thiserror::Error;

/// Errors that can occur while fetching rates from the upstream API.
///
/// Every variant is recoverable at fetch-cycle granularity: the caller logs
/// the failure, skips the cycle, and lets the next timer tick try again.
#[derive(Error, Debug)]
pub enum RatesError {
    /// The HTTP request itself failed (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with a non-success status code.
    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be parsed into the expected shape.
    #[error("Malformed rate payload: {0}")]
    Malformed(String),

    /// The payload parsed but did not carry a block for this currency.
    #[error("Currency {0} missing from rate payload")]
    MissingCurrency(&'static str),
}
