use log::debug;
use std::sync::Arc;

use super::products_model::Product;
use super::products_traits::{ProductRepositoryTrait, ProductServiceTrait};
use crate::currencies::{CurrencyCode, CurrencyServiceTrait};
use crate::errors::Result;
use crate::paging::{Page, PageRequest};

/// Service for reading products.
pub struct ProductService {
    repository: Arc<dyn ProductRepositoryTrait>,
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepositoryTrait>,
        currencies: Arc<dyn CurrencyServiceTrait>,
    ) -> Self {
        Self {
            repository,
            currencies,
        }
    }
}

impl ProductServiceTrait for ProductService {
    fn find_by_id(&self, id: i64) -> Result<Product> {
        let product = self.repository.get_by_id(id)?;
        let dollar = self.currencies.latest(CurrencyCode::Usd)?;

        debug!(
            "Adjusting product {} price {} by USD sell rate {}",
            product.id, product.price, dollar.sell
        );

        Ok(Product {
            price: product.price * dollar.sell,
            ..product
        })
    }

    fn find_all(&self, page: &PageRequest) -> Result<Page<Product>> {
        self.repository.list(page)
    }

    fn search_by_description(&self, query: &str, page: &PageRequest) -> Result<Page<Product>> {
        self.repository.search_by_description(query, page)
    }
}
