use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use catalog_core::currencies::{
    CurrencyCode, CurrencyQuote, CurrencyRepositoryTrait, NewCurrencyQuote,
};
use catalog_core::Result;

use super::model::CurrencyQuoteDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::currency_quotes;

/// Repository for the append-only currency quote store.
pub struct CurrencyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    async fn save(&self, new_quote: NewCurrencyQuote) -> Result<CurrencyQuote> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CurrencyQuote> {
                // UUIDv7 ids are time-ordered, which makes them the
                // tiebreaker for quotes written within the same timestamp
                // granularity.
                let row = CurrencyQuoteDB {
                    id: Uuid::now_v7().to_string(),
                    code: new_quote.code.as_str().to_string(),
                    name: new_quote.name,
                    buy: new_quote.buy.to_string(),
                    sell: new_quote.sell.to_string(),
                    variation: new_quote.variation.to_string(),
                    quoted_at: Utc::now().naive_utc(),
                };

                let inserted = diesel::insert_into(currency_quotes::table)
                    .values(&row)
                    .get_result::<CurrencyQuoteDB>(conn)
                    .map_err(StorageError::from)?;
                inserted.try_into()
            })
            .await
    }

    fn latest(&self, code: CurrencyCode) -> Result<Option<CurrencyQuote>> {
        let mut conn = get_connection(&self.pool)?;

        let row = currency_quotes::table
            .select(CurrencyQuoteDB::as_select())
            .filter(currency_quotes::code.eq(code.as_str()))
            .order((
                currency_quotes::quoted_at.desc(),
                currency_quotes::id.desc(),
            ))
            .first::<CurrencyQuoteDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        row.map(CurrencyQuote::try_from).transpose()
    }

    fn latest_all(&self) -> Result<Vec<CurrencyQuote>> {
        let mut latest = Vec::with_capacity(CurrencyCode::ALL.len());
        for code in CurrencyCode::ALL {
            if let Some(quote) = self.latest(code)? {
                latest.push(quote);
            }
        }
        Ok(latest)
    }

    fn history(&self, code: CurrencyCode, limit: i64) -> Result<Vec<CurrencyQuote>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = currency_quotes::table
            .select(CurrencyQuoteDB::as_select())
            .filter(currency_quotes::code.eq(code.as_str()))
            .order((
                currency_quotes::quoted_at.desc(),
                currency_quotes::id.desc(),
            ))
            .limit(limit)
            .load::<CurrencyQuoteDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter().map(CurrencyQuote::try_from).collect()
    }
}
