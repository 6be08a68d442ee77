use thiserror::Error;

use super::currencies_model::CurrencyCode;

#[derive(Error, Debug)]
pub enum CurrencyError {
    /// No quote row exists yet for this currency. Distinct from a missing
    /// product so callers can surface the two conditions differently.
    #[error("No exchange rate available for {0}")]
    RateUnavailable(CurrencyCode),

    #[error("Unknown currency code: {0}")]
    UnknownCode(String),
}
