use async_trait::async_trait;

use super::products_model::{NewProduct, Product};
use crate::errors::Result;
use crate::paging::{Page, PageRequest};

/// Trait defining the contract for product storage.
#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    /// Fetches a product by id. Missing ids are a `DatabaseError::NotFound`.
    fn get_by_id(&self, id: i64) -> Result<Product>;

    /// Lists products in id order with pagination metadata.
    fn list(&self, page: &PageRequest) -> Result<Page<Product>>;

    /// Case-insensitive substring match on the description, same pagination
    /// contract as `list`.
    fn search_by_description(&self, query: &str, page: &PageRequest) -> Result<Page<Product>>;

    /// Inserts a product. Used by the administrative path and tests; not
    /// exposed over HTTP.
    async fn create(&self, new_product: NewProduct) -> Result<Product>;
}

/// Trait defining the read-only product operations exposed to the HTTP
/// surface.
pub trait ProductServiceTrait: Send + Sync {
    /// Fetches a product and applies the latest USD sell rate to its price.
    ///
    /// Fails with `DatabaseError::NotFound` for a missing product and with
    /// `CurrencyError::RateUnavailable` when no USD quote has been stored
    /// yet.
    fn find_by_id(&self, id: i64) -> Result<Product>;

    /// Lists products with their base prices.
    fn find_all(&self, page: &PageRequest) -> Result<Page<Product>>;

    /// Searches descriptions case-insensitively, returning base prices.
    fn search_by_description(&self, query: &str, page: &PageRequest) -> Result<Page<Product>>;
}
