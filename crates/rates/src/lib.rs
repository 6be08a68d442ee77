//! Outbound exchange-rate client.
//!
//! This crate talks to the external finance API and nothing else. It knows
//! how to fetch and parse the latest USD/EUR quotes; persistence and
//! scheduling live elsewhere and consume the [`RateProvider`] trait.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RatesError;
pub use models::{CurrencyRate, RateSnapshot};
pub use provider::{HgBrasilProvider, RateProvider, DEFAULT_ENDPOINT};
