//! Route handlers. Each one turns HTTP input into a single `ProductClient`
//! call and shapes the reply; errors go back as `ApiError`.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::AppState;
use crate::domain::Product;
use crate::error::{ApiError, ApiResult};
use crate::product_actor::validate_product_payload;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub total: usize,
    pub results: Vec<Product>,
}

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.products.list_products().await?))
}

/// GET /api/products/search?q=
pub async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(params) = params?;
    let needle = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::Validation("Missing search query (q)".to_string()))?;

    let results = state.products.search_products(needle).await?;
    Ok(Json(SearchResponse {
        total: results.len(),
        results,
    }))
}

/// GET /api/products/stats
pub async fn product_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, usize>>> {
    Ok(Json(state.products.category_stats().await?))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.products.get_product(id).await?))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(body) = payload?;
    let fields = validate_product_payload(&body)?;

    let product = state.products.create_product(fields).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
///
/// The payload is validated before the id is looked up, so a bad body on an
/// unknown id is a 400, not a 404.
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(body) = payload?;
    let fields = validate_product_payload(&body)?;

    Ok(Json(state.products.update_product(id, fields).await?))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.products.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unmatched paths, and for known paths hit with a method they
/// don't serve.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
