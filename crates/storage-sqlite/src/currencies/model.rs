//! Database models for currency quotes.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use catalog_core::currencies::{CurrencyCode, CurrencyQuote};
use catalog_core::errors::{Error, ValidationError};

/// Database model for currency quotes. Rates are stored as TEXT to keep
/// exact decimal values; `code` holds the ISO 4217 code.
#[derive(Queryable, Identifiable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::currency_quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyQuoteDB {
    pub id: String,
    pub code: String,
    pub name: String,
    pub buy: String,
    pub sell: String,
    pub variation: String,
    pub quoted_at: NaiveDateTime,
}

impl TryFrom<CurrencyQuoteDB> for CurrencyQuote {
    type Error = Error;

    fn try_from(db: CurrencyQuoteDB) -> Result<Self, Self::Error> {
        let code = CurrencyCode::from_str(&db.code)?;
        Ok(CurrencyQuote {
            id: db.id,
            code,
            name: db.name,
            buy: parse_rate(&db.buy)?,
            sell: parse_rate(&db.sell)?,
            variation: parse_rate(&db.variation)?,
            quoted_at: db.quoted_at,
        })
    }
}

fn parse_rate(value: &str) -> Result<Decimal, Error> {
    Decimal::from_str(value)
        .map_err(|e| ValidationError::DecimalParse(e).into())
}
