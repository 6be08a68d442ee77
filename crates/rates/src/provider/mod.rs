//! Rate providers.

mod hg_brasil;
mod traits;

pub use hg_brasil::{HgBrasilProvider, DEFAULT_ENDPOINT};
pub use traits::RateProvider;
