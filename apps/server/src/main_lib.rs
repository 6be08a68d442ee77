use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use catalog_core::currencies::{CurrencyService, CurrencyServiceTrait};
use catalog_core::products::{ProductService, ProductServiceTrait};
use catalog_rates::{HgBrasilProvider, RateProvider};
use catalog_storage_sqlite::currencies::CurrencyRepository;
use catalog_storage_sqlite::db;
use catalog_storage_sqlite::products::ProductRepository;

pub struct AppState {
    pub product_service: Arc<dyn ProductServiceTrait>,
    pub currency_service: Arc<dyn CurrencyServiceTrait>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("CATALOG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let provider: Arc<dyn RateProvider> = Arc::new(HgBrasilProvider::new(
        config.rates_url.clone(),
        config.rates_timeout,
    ));

    let currency_repository = Arc::new(CurrencyRepository::new(pool.clone(), writer.clone()));
    let currency_service: Arc<dyn CurrencyServiceTrait> =
        Arc::new(CurrencyService::new(currency_repository, provider));

    let product_repository = Arc::new(ProductRepository::new(pool.clone(), writer.clone()));
    let product_service: Arc<dyn ProductServiceTrait> = Arc::new(ProductService::new(
        product_repository,
        currency_service.clone(),
    ));

    Ok(Arc::new(AppState {
        product_service,
        currency_service,
        db_path,
    }))
}
