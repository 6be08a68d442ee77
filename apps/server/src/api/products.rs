use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{PageView, ProductView},
};
use catalog_core::paging::PageRequest;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductListQuery {
    page: Option<i64>,
    page_size: Option<i64>,
    search: Option<String>,
}

async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<Json<PageView<ProductView>>> {
    let page = PageRequest::new(query.page, query.page_size);

    let result = match query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => state.product_service.search_by_description(term, &page)?,
        None => state.product_service.find_all(&page)?,
    };

    Ok(Json(PageView::from(result.map(ProductView::from))))
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductView>> {
    let product = state.product_service.find_by_id(id)?;
    Ok(Json(ProductView::from(product)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
}
