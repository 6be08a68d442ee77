use std::sync::{Mutex, OnceLock};

use axum::body::{to_bytes, Body};
use axum::http::Request;
use rust_decimal_macros::dec;
use tempfile::tempdir;
use tower::ServiceExt;

use catalog_core::currencies::{CurrencyCode, CurrencyRepositoryTrait, NewCurrencyQuote};
use catalog_core::products::{NewProduct, ProductRepositoryTrait};
use catalog_server::{api::app_router, build_state, config::Config};
use catalog_storage_sqlite::currencies::CurrencyRepository;
use catalog_storage_sqlite::db;
use catalog_storage_sqlite::products::ProductRepository;

/// Serializes env mutation across tests in this binary.
fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

struct TestContext {
    app: axum::Router,
    products: ProductRepository,
    currencies: CurrencyRepository,
    _dir: tempfile::TempDir,
}

async fn build_test_context() -> TestContext {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let config = {
        let _guard = env_lock().lock().unwrap();
        std::env::set_var("CATALOG_DB_PATH", &db_path);
        let config = Config::from_env();
        std::env::remove_var("CATALOG_DB_PATH");
        config
    };

    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    // Seed through a second pool over the same database file; the service
    // under test reads through its own connections.
    let pool = db::create_pool(db_path.to_str().unwrap()).unwrap();
    let writer = db::spawn_writer((*pool).clone());
    let products = ProductRepository::new(pool.clone(), writer.clone());
    let currencies = CurrencyRepository::new(pool, writer);

    TestContext {
        app,
        products,
        currencies,
        _dir: dir,
    }
}

async fn get_json(
    app: &axum::Router,
    uri: &str,
) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, value)
}

fn usd_quote(sell: rust_decimal::Decimal) -> NewCurrencyQuote {
    NewCurrencyQuote {
        code: CurrencyCode::Usd,
        name: "Dollar".to_string(),
        buy: sell,
        sell,
        variation: dec!(0.1),
    }
}

fn eur_quote() -> NewCurrencyQuote {
    NewCurrencyQuote {
        code: CurrencyCode::Eur,
        name: "Euro".to_string(),
        buy: dec!(6.11),
        sell: dec!(6.12),
        variation: dec!(-0.2),
    }
}

#[tokio::test]
async fn product_lookup_applies_rate_and_maps_errors() {
    let ctx = build_test_context().await;

    let created = ctx
        .products
        .create(NewProduct {
            description: "Blue Shirt".to_string(),
            price: dec!(10.00),
            barcode: "7891234567895".to_string(),
        })
        .await
        .unwrap();

    // No quote stored yet: distinct rate-unavailable condition, not a 500
    let (status, body) = get_json(&ctx.app, &format!("/api/v1/products/{}", created.id)).await;
    assert_eq!(status, 503);
    assert_eq!(body["code"], 503);

    ctx.currencies.save(usd_quote(dec!(5.0))).await.unwrap();

    let (status, body) = get_json(&ctx.app, &format!("/api/v1/products/{}", created.id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["description"], "Blue Shirt");
    assert_eq!(body["barcode"], "7891234567895");
    let price = body["price"].as_f64().unwrap();
    assert!((price - 50.0).abs() < 1e-9);

    // Missing product is a 404, with the usual error body shape
    let (status, body) = get_json(&ctx.app, "/api/v1/products/999").await;
    assert_eq!(status, 404);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn product_listing_paginates_and_searches() {
    let ctx = build_test_context().await;

    for description in ["Blue Shirt", "Red Shirt", "Green Hat"] {
        ctx.products
            .create(NewProduct {
                description: description.to_string(),
                price: dec!(25.00),
                barcode: "7891234567895".to_string(),
            })
            .await
            .unwrap();
    }

    let (status, body) = get_json(&ctx.app, "/api/v1/products?page=0&pageSize=2").await;
    assert_eq!(status, 200);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalItems"], 3);
    assert_eq!(body["totalPages"], 2);
    // Listing returns base prices untouched
    let price = body["items"][0]["price"].as_f64().unwrap();
    assert!((price - 25.0).abs() < 1e-9);

    let (status, body) = get_json(&ctx.app, "/api/v1/products?page=5&pageSize=2").await;
    assert_eq!(status, 200);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["totalItems"], 3);

    // Case-insensitive description search
    let (status, body) = get_json(&ctx.app, "/api/v1/products?search=shirt").await;
    assert_eq!(status, 200);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalItems"], 2);

    let (status, body) = get_json(&ctx.app, "/api/v1/products?search=HAT").await;
    assert_eq!(status, 200);
    assert_eq!(body["items"][0]["description"], "Green Hat");
}

#[tokio::test]
async fn latest_rates_and_health_endpoints() {
    let ctx = build_test_context().await;

    let (status, body) = get_json(&ctx.app, "/api/v1/rates/latest").await;
    assert_eq!(status, 200);
    assert!(body.as_array().unwrap().is_empty());

    ctx.currencies.save(usd_quote(dec!(5.33))).await.unwrap();
    ctx.currencies.save(eur_quote()).await.unwrap();
    // A second USD quote supersedes the first
    ctx.currencies.save(usd_quote(dec!(5.40))).await.unwrap();

    let (status, body) = get_json(&ctx.app, "/api/v1/rates/latest").await;
    assert_eq!(status, 200);
    let rates = body.as_array().unwrap();
    assert_eq!(rates.len(), 2);
    let usd = rates.iter().find(|r| r["code"] == "USD").unwrap();
    assert!((usd["sell"].as_f64().unwrap() - 5.40).abs() < 1e-9);
    let eur = rates.iter().find(|r| r["code"] == "EUR").unwrap();
    assert_eq!(eur["name"], "Euro");

    // Full USD history, newest first
    let (status, body) = get_json(&ctx.app, "/api/v1/rates/history?code=USD").await;
    assert_eq!(status, 200);
    let history = body.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert!(
        history[0]["sell"].as_f64().unwrap() > history[1]["sell"].as_f64().unwrap()
    );

    let (status, _body) = get_json(&ctx.app, "/api/v1/rates/history?code=GBP").await;
    assert_eq!(status, 400);

    let response = ctx
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
