use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::RateView,
};
use catalog_core::currencies::CurrencyCode;

async fn get_latest_rates(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RateView>>> {
    let quotes = state.currency_service.latest_all()?;
    Ok(Json(quotes.into_iter().map(RateView::from).collect()))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateHistoryQuery {
    code: String,
    limit: Option<i64>,
}

async fn get_rate_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RateHistoryQuery>,
) -> ApiResult<Json<Vec<RateView>>> {
    let code = query
        .code
        .parse::<CurrencyCode>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let limit = query.limit.unwrap_or(30).clamp(1, 500);

    let quotes = state.currency_service.history(code, limit)?;
    Ok(Json(quotes.into_iter().map(RateView::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rates/latest", get(get_latest_rates))
        .route("/rates/history", get(get_rate_history))
}
