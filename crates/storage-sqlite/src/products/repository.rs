use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use catalog_core::errors::DatabaseError;
use catalog_core::paging::{Page, PageRequest};
use catalog_core::products::{NewProduct, Product, ProductRepositoryTrait};
use catalog_core::Result;

use super::model::{NewProductDB, ProductDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::products;

/// Repository for product rows.
pub struct ProductRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProductRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Builds the case-insensitive LIKE condition used by description
    /// search. Single quotes are doubled so the pattern stays inert.
    fn description_match(query: &str) -> String {
        let pattern = query.replace('\'', "''").to_uppercase();
        format!("UPPER(description) LIKE '%{}%'", pattern)
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    fn get_by_id(&self, id: i64) -> Result<Product> {
        let mut conn = get_connection(&self.pool)?;

        let row = products::table
            .select(ProductDB::as_select())
            .find(id)
            .first::<ProductDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(db) => db.try_into(),
            None => Err(DatabaseError::NotFound(format!("product {}", id)).into()),
        }
    }

    fn list(&self, page: &PageRequest) -> Result<Page<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let total = products::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;

        let rows = products::table
            .select(ProductDB::as_select())
            .order(products::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .load::<ProductDB>(&mut conn)
            .map_err(StorageError::from)?;

        let items = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page::new(items, page, total))
    }

    fn search_by_description(&self, query: &str, page: &PageRequest) -> Result<Page<Product>> {
        let mut conn = get_connection(&self.pool)?;

        let condition = Self::description_match(query);

        let total = products::table
            .filter(diesel::dsl::sql::<diesel::sql_types::Bool>(&condition))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;

        let rows = products::table
            .select(ProductDB::as_select())
            .filter(diesel::dsl::sql::<diesel::sql_types::Bool>(&condition))
            .order(products::id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .load::<ProductDB>(&mut conn)
            .map_err(StorageError::from)?;

        let items = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page::new(items, page, total))
    }

    async fn create(&self, new_product: NewProduct) -> Result<Product> {
        new_product.validate()?;
        let row: NewProductDB = new_product.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Product> {
                let inserted = diesel::insert_into(products::table)
                    .values(&row)
                    .get_result::<ProductDB>(conn)
                    .map_err(StorageError::from)?;
                inserted.try_into()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use catalog_core::Error;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    async fn setup() -> (ProductRepository, TempDir) {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");
        let db_path = db::init(db_path.to_str().unwrap()).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        let writer = db::spawn_writer((*pool).clone());
        (ProductRepository::new(pool, writer), dir)
    }

    fn new_product(description: &str) -> NewProduct {
        NewProduct {
            description: description.to_string(),
            price: dec!(49.90),
            barcode: "7891234567895".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let (repository, _dir) = setup().await;

        let created = repository.create(new_product("Blue Shirt")).await.unwrap();
        assert!(created.id > 0);

        let fetched = repository.get_by_id(created.id).unwrap();
        assert_eq!(fetched.description, "Blue Shirt");
        assert_eq!(fetched.price, dec!(49.90));
        assert_eq!(fetched.barcode, "7891234567895");
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let (repository, _dir) = setup().await;

        let err = repository.get_by_id(999).unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn invalid_product_is_rejected_before_insert() {
        let (repository, _dir) = setup().await;

        let mut bad = new_product("Blue Shirt");
        bad.price = dec!(-1);
        assert!(repository.create(bad).await.is_err());

        let page = repository.list(&PageRequest::default()).unwrap();
        assert_eq!(page.total_items, 0);
    }

    #[tokio::test]
    async fn list_paginates_in_id_order() {
        let (repository, _dir) = setup().await;
        for i in 0..5 {
            repository
                .create(new_product(&format!("Product {}", i)))
                .await
                .unwrap();
        }

        let first = repository.list(&PageRequest::new(Some(0), Some(2))).unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total_items, 5);
        assert_eq!(first.total_pages(), 3);
        assert!(first.items[0].id < first.items[1].id);

        let last = repository.list(&PageRequest::new(Some(2), Some(2))).unwrap();
        assert_eq!(last.items.len(), 1);

        let beyond = repository.list(&PageRequest::new(Some(9), Some(2))).unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_items, 5);
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let (repository, _dir) = setup().await;
        repository.create(new_product("Blue Shirt")).await.unwrap();
        repository.create(new_product("Green Hat")).await.unwrap();

        let page = repository
            .search_by_description("shirt", &PageRequest::default())
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].description, "Blue Shirt");
        assert_eq!(page.total_items, 1);
    }

    #[tokio::test]
    async fn search_pattern_with_quote_is_escaped() {
        let (repository, _dir) = setup().await;
        repository
            .create(new_product("Driver's Cap"))
            .await
            .unwrap();

        let page = repository
            .search_by_description("driver's", &PageRequest::default())
            .unwrap();
        assert_eq!(page.items.len(), 1);
    }
}
