use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub similar: Option<bool>,
    pub page: Option<u32>,
}

#[derive(Deserialize)]
pub struct ImageParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// GET /api/products/search?name=bluetooth+speaker&page=0
///
/// Full-text product search. Pass `similar=true` for fuzzy matching.
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let name = params
        .name
        .ok_or_else(|| AppError::bad_request("Missing required query parameter: name"))?;

    let page = params.page;
    let similar = params.similar.unwrap_or(false);
    let products = state
        .run(move |sdk| {
            if similar {
                sdk.search().similar(&name, page)
            } else {
                sdk.search().by_name(&name, page)
            }
        })
        .await?;

    let count = products.len();
    Ok(Json(json!({ "data": products, "count": count })))
}

/// GET /api/products/:ean
///
/// Look up a single product by barcode. Resolved products are cached in
/// memory, so repeated requests for the same barcode spend no API credits.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(ean): Path<String>,
) -> Result<Json<Value>, AppError> {
    // 1. Check the in-memory cache.
    {
        let cache = state
            .product_cache
            .lock()
            .map_err(|_| AppError::internal("Cache lock poisoned"))?;
        if let Some(cached) = cache.get(&ean) {
            return Ok(Json(json!({ "data": cached })));
        }
    }

    // 2. Ask the lookup service.
    let ean_lookup = ean.clone();
    let product = state
        .run(move |sdk| sdk.lookup().gtin(&ean_lookup, None))
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("No product registered for barcode '{ean}'"))
        })?;

    let value =
        serde_json::to_value(&product).map_err(|e| AppError::internal(e.to_string()))?;

    // 3. Cache and return.
    {
        let mut cache = state
            .product_cache
            .lock()
            .map_err(|_| AppError::internal("Cache lock poisoned"))?;
        cache.insert(ean, value.clone());
    }

    Ok(Json(json!({ "data": value })))
}

/// GET /api/products/:ean/image?width=204&height=100
///
/// Render a barcode image for the given EAN and return its base64 payload.
pub async fn get_product_image(
    State(state): State<Arc<AppState>>,
    Path(ean): Path<String>,
    Query(params): Query<ImageParams>,
) -> Result<Json<Value>, AppError> {
    let ean_request = ean.clone();
    let payload = state
        .run(move |sdk| {
            sdk.images()
                .barcode(&ean_request, params.width, params.height)
        })
        .await?;

    Ok(Json(json!({ "ean": ean, "image": payload })))
}
