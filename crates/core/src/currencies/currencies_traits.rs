use async_trait::async_trait;

use super::currencies_model::{CurrencyCode, CurrencyQuote, NewCurrencyQuote};
use crate::errors::Result;

/// Trait defining the contract for currency quote storage.
///
/// The store is append-only: there are no update or delete operations, and
/// `save` must be durable before it returns.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    /// Appends a new quote row, assigning its id and timestamp.
    async fn save(&self, new_quote: NewCurrencyQuote) -> Result<CurrencyQuote>;

    /// Returns the most recent quote for a currency, if any exists.
    fn latest(&self, code: CurrencyCode) -> Result<Option<CurrencyQuote>>;

    /// Returns the most recent quote per tracked currency.
    fn latest_all(&self) -> Result<Vec<CurrencyQuote>>;

    /// Returns up to `limit` quotes for a currency, newest first.
    fn history(&self, code: CurrencyCode, limit: i64) -> Result<Vec<CurrencyQuote>>;
}

/// Trait defining the contract for currency operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    /// Returns the latest quote for a currency or
    /// [`CurrencyError::RateUnavailable`](super::CurrencyError::RateUnavailable)
    /// if none has been stored yet.
    fn latest(&self, code: CurrencyCode) -> Result<CurrencyQuote>;

    fn latest_all(&self) -> Result<Vec<CurrencyQuote>>;

    fn history(&self, code: CurrencyCode, limit: i64) -> Result<Vec<CurrencyQuote>>;

    /// Runs one fetch cycle: pulls current rates from the provider and
    /// appends one quote per currency. Returns the number of quotes written.
    async fn refresh_rates(&self) -> Result<usize>;
}
