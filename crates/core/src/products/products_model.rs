//! Product domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::BARCODE_MAX_LEN;
use crate::errors::{Result, ValidationError};

/// A catalog product.
///
/// `price` is the stored base price. Currency adjustment happens at read
/// time in the service layer and is never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub description: String,
    pub price: Decimal,
    pub barcode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A product about to be persisted by the administrative path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub description: String,
    pub price: Decimal,
    pub barcode: String,
}

impl NewProduct {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "price must be positive, got {}",
                self.price
            ))
            .into());
        }
        if self.barcode.is_empty() {
            return Err(ValidationError::MissingField("barcode".to_string()).into());
        }
        if self.barcode.chars().count() > BARCODE_MAX_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "barcode must be at most {} characters",
                BARCODE_MAX_LEN
            ))
            .into());
        }
        Ok(())
    }
}
