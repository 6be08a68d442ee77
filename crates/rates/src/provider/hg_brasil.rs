//! HG Brasil finance API provider.
//!
//! Fetches the latest USD and EUR quotes from the public HG Brasil finance
//! endpoint. The response nests the currency table under
//! `results.currencies`; anything else in the payload is ignored.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::RatesError;
use crate::models::{CurrencyRate, RateSnapshot};
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "HG_BRASIL";

/// Public endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.hgbrasil.com/finance";

#[derive(Debug, Deserialize)]
struct FinanceResponse {
    results: FinanceResults,
}

#[derive(Debug, Deserialize)]
struct FinanceResults {
    currencies: CurrencyTable,
}

#[derive(Debug, Deserialize)]
struct CurrencyTable {
    #[serde(rename = "USD")]
    usd: Option<CurrencyRate>,
    #[serde(rename = "EUR")]
    eur: Option<CurrencyRate>,
}

/// HG Brasil finance API provider.
pub struct HgBrasilProvider {
    client: Client,
    endpoint: String,
}

impl HgBrasilProvider {
    /// Create a provider against the given endpoint with a bounded request
    /// timeout. A stalled upstream must not wedge the refresh timer slot.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RateProvider for HgBrasilProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_rates(&self) -> Result<RateSnapshot, RatesError> {
        log::debug!("Fetching latest rates from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Status(status));
        }

        let payload: FinanceResponse = response
            .json()
            .await
            .map_err(|e| RatesError::Malformed(e.to_string()))?;

        let currencies = payload.results.currencies;
        let dollar = currencies.usd.ok_or(RatesError::MissingCurrency("USD"))?;
        let euro = currencies.eur.ok_or(RatesError::MissingCurrency("EUR"))?;

        Ok(RateSnapshot { dollar, euro })
    }
}
