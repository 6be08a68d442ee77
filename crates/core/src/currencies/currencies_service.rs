use log::debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::currencies_errors::CurrencyError;
use super::currencies_model::{CurrencyCode, CurrencyQuote, NewCurrencyQuote};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use crate::errors::Result;
use catalog_rates::RateProvider;

/// Service for reading and refreshing currency quotes.
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
    provider: Arc<dyn RateProvider>,
}

impl CurrencyService {
    pub fn new(
        repository: Arc<dyn CurrencyRepositoryTrait>,
        provider: Arc<dyn RateProvider>,
    ) -> Self {
        Self {
            repository,
            provider,
        }
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    fn latest(&self, code: CurrencyCode) -> Result<CurrencyQuote> {
        match self.repository.latest(code)? {
            Some(quote) => Ok(quote),
            None => Err(CurrencyError::RateUnavailable(code).into()),
        }
    }

    fn latest_all(&self) -> Result<Vec<CurrencyQuote>> {
        self.repository.latest_all()
    }

    fn history(&self, code: CurrencyCode, limit: i64) -> Result<Vec<CurrencyQuote>> {
        self.repository.history(code, limit)
    }

    async fn refresh_rates(&self) -> Result<usize> {
        let snapshot = self.provider.latest_rates().await?;

        // No transaction spans the two saves; a failure between them leaves
        // one currency stale until the next cycle.
        let mut written = 0;
        let quotes = [
            NewCurrencyQuote::from_rate(CurrencyCode::Usd, &snapshot.dollar),
            NewCurrencyQuote::from_rate(CurrencyCode::Eur, &snapshot.euro),
        ];
        for new_quote in quotes {
            let quote = self.repository.save(new_quote).await?;
            debug!(
                "Stored {} quote from {} (sell {})",
                quote.code,
                self.provider.id(),
                quote.sell
            );
            written += 1;
        }

        Ok(written)
    }
}
