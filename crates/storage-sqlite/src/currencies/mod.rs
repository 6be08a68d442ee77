mod model;
mod repository;

pub use model::CurrencyQuoteDB;
pub use repository::CurrencyRepository;
