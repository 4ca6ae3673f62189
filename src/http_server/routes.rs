//! Product HTTP routes.
//!
//! Each handler is a thin shell: parse, validate, call the store, map
//! the error. State is an explicit `Arc<AppState>` injected through
//! `with_state`, never a process-wide singleton.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::observability::Logger;
use crate::store::{Product, ProductTable};
use crate::validate::{validate_create, validate_update};

use super::errors::{ApiError, ApiResult};

/// State shared across handlers
pub struct AppState {
    pub table: ProductTable,
}

impl AppState {
    pub fn new(table: ProductTable) -> Self {
        Self { table }
    }
}

/// Create the product router
pub fn product_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/product", post(create_product_handler))
        .route("/product", get(list_products_handler))
        .route("/product/{id}", get(get_product_handler))
        .route("/product/{id}", put(update_product_handler))
        .route("/product/{id}", delete(delete_product_handler))
        .with_state(state)
}

async fn create_product_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let input = validate_create(&body).map_err(|_| ApiError::MissingFields)?;
    let product = state.table.insert(input).map_err(ApiError::from_store)?;

    let id = product.id.to_string();
    Logger::info(
        "product_created",
        &[("id", id.as_str()), ("name", product.name.as_str())],
    );

    Ok((StatusCode::CREATED, Json(product)))
}

async fn list_products_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state.table.list_all().map_err(ApiError::from_store)?;
    Ok(Json(products))
}

async fn get_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Product>> {
    let product = state.table.get(id).map_err(ApiError::from_store)?;
    Ok(Json(product))
}

async fn update_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Product>> {
    // Existence first, so a bad body on a missing id still reports 404.
    state.table.get(id).map_err(ApiError::from_store)?;

    let input = validate_update(&body).map_err(|_| ApiError::InvalidUpdate)?;
    let product = state.table.update(id, input).map_err(ApiError::from_store)?;
    Ok(Json(product))
}

async fn delete_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Product>> {
    let product = state.table.delete(id).map_err(ApiError::from_store)?;

    let id = product.id.to_string();
    Logger::info("product_deleted", &[("id", id.as_str())]);

    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_router_builds() {
        let dir = TempDir::new().unwrap();
        let table = ProductTable::open(dir.path().join("products.json")).unwrap();
        let _router = product_routes(Arc::new(AppState::new(table)));
    }
}
