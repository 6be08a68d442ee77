//! Currency quote domain models.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies_errors::CurrencyError;
use catalog_rates::CurrencyRate;

/// The currencies this service tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 2] = [CurrencyCode::Usd, CurrencyCode::Eur];

    /// Returns the ISO 4217 code, which is also the database representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(CurrencyCode::Usd),
            "EUR" => Ok(CurrencyCode::Eur),
            other => Err(CurrencyError::UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted exchange quote.
///
/// Rows are immutable: every fetch cycle appends a new quote, and the latest
/// rate for a currency is the row with the maximum `quoted_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyQuote {
    pub id: String,
    pub code: CurrencyCode,
    pub name: String,
    pub buy: Decimal,
    pub sell: Decimal,
    pub variation: Decimal,
    pub quoted_at: NaiveDateTime,
}

/// A quote about to be persisted. Id and timestamp are assigned at write
/// time by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrencyQuote {
    pub code: CurrencyCode,
    pub name: String,
    pub buy: Decimal,
    pub sell: Decimal,
    pub variation: Decimal,
}

impl NewCurrencyQuote {
    /// Maps one upstream currency block onto a quote for `code`.
    pub fn from_rate(code: CurrencyCode, rate: &CurrencyRate) -> Self {
        Self {
            code,
            name: rate.name.clone(),
            buy: rate.buy,
            sell: rate.sell,
            variation: rate.variation,
        }
    }
}
