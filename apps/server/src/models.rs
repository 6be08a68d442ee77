use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::currencies as core_currencies;
use catalog_core::paging::Page;
use catalog_core::products as core_products;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i64,
    pub description: String,
    pub price: Decimal,
    pub barcode: String,
}

impl From<core_products::Product> for ProductView {
    fn from(p: core_products::Product) -> Self {
        Self {
            id: p.id,
            description: p.description,
            price: p.price,
            barcode: p.barcode,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RateView {
    pub code: String,
    pub name: String,
    pub buy: Decimal,
    pub sell: Decimal,
    pub variation: Decimal,
    pub quoted_at: NaiveDateTime,
}

impl From<core_currencies::CurrencyQuote> for RateView {
    fn from(q: core_currencies::CurrencyQuote) -> Self {
        Self {
            code: q.code.as_str().to_string(),
            name: q.name,
            buy: q.buy,
            sell: q.sell,
            variation: q.variation,
            quoted_at: q.quoted_at,
        }
    }
}

/// Paginated response envelope.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> From<Page<T>> for PageView<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages,
        }
    }
}
