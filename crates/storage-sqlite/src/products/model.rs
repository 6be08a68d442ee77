//! Database models for products.

use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use catalog_core::errors::{Error, ValidationError};
use catalog_core::products::{NewProduct, Product};

/// Database model for products. Prices are stored as TEXT to keep exact
/// decimal values.
#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductDB {
    pub id: i64,
    pub description: String,
    pub price: String,
    pub barcode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable product row; the id is assigned by the database.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProductDB {
    pub description: String,
    pub price: String,
    pub barcode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NewProduct> for NewProductDB {
    fn from(new_product: NewProduct) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            description: new_product.description,
            price: new_product.price.to_string(),
            barcode: new_product.barcode,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<ProductDB> for Product {
    type Error = Error;

    fn try_from(db: ProductDB) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&db.price).map_err(ValidationError::DecimalParse)?;
        Ok(Product {
            id: db.id,
            description: db.description,
            price,
            barcode: db.barcode,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}
