use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub rates_url: String,
    pub rates_refresh: Duration,
    pub rates_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("CATALOG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid CATALOG_LISTEN_ADDR");
        let db_path =
            std::env::var("CATALOG_DB_PATH").unwrap_or_else(|_| "./db/catalog.db".into());
        let cors_allow = std::env::var("CATALOG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("CATALOG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let rates_url = std::env::var("CATALOG_RATES_URL")
            .unwrap_or_else(|_| catalog_rates::DEFAULT_ENDPOINT.into());
        let rates_refresh_secs: u64 = std::env::var("CATALOG_RATES_REFRESH_SECS")
            .unwrap_or_else(|_| "500".into())
            .parse()
            .unwrap_or(500);
        let rates_timeout_secs: u64 = std::env::var("CATALOG_RATES_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .unwrap_or(10);
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            rates_url,
            rates_refresh: Duration::from_secs(rates_refresh_secs),
            rates_timeout: Duration::from_secs(rates_timeout_secs),
        }
    }
}
