use async_trait::async_trait;

use crate::errors::RatesError;
use crate::models::RateSnapshot;

/// A source of current exchange rates.
///
/// Implementations perform exactly one outbound request per call and do not
/// retry; failure handling is the caller's concern.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Stable identifier for logging.
    fn id(&self) -> &'static str;

    /// Fetches the latest USD and EUR quotes.
    async fn latest_rates(&self) -> Result<RateSnapshot, RatesError>;
}
