use catalog_server::api::app_router;
use catalog_server::config::Config;
use catalog_server::main_lib::{build_state, init_tracing};
use catalog_server::scheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config).await?;

    // Periodic exchange-rate refresh, cancelled when the server stops
    let refresh_task = scheduler::start_rates_refresh_scheduler(state.clone(), config.rates_refresh);

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;

    refresh_task.abort();
    Ok(())
}
