// src/handlers/product.rs
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use crate::dtos::product::{CreateProductRequest, LowStockQuery, ProductResponse};
use crate::models::product::{LowStockCheck, OperationResult};
use crate::middleware::auth::AuthContext;
use crate::state::AppState;
use crate::error::AppError;
use tracing::instrument;

// GET /products - List all products
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.inventory.list_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// GET /products/{sku} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(sku): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.inventory.get_product(&sku).await?;
    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Add new product
#[instrument(skip(state, auth, payload), fields(operator = %auth.operator))]
pub async fn add_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    auth.require_manager("add products")?;
    let Json(payload) = payload?;

    let product = state
        .inventory
        .add_product(&payload.name, &payload.sku, payload.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// DELETE /products/{sku} - Remove product
#[instrument(skip(state, auth), fields(operator = %auth.operator))]
pub async fn remove_product(
    Path(sku): Path<String>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<OperationResult>, AppError> {
    auth.require_manager("remove products")?;

    let result = state.inventory.remove_product(&sku).await?;
    Ok(Json(result))
}

// POST /products/{sku}/low-stock-check - Alert if quantity is below threshold
#[instrument(skip(state, auth, query), fields(operator = %auth.operator))]
pub async fn check_low_stock(
    Path(sku): Path<String>,
    query: Result<Query<LowStockQuery>, QueryRejection>,
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<LowStockCheck>, AppError> {
    let Query(query) = query?;
    let check = match query.threshold {
        Some(threshold) => {
            state
                .inventory
                .check_low_stock_with_threshold(&sku, threshold)
                .await?
        }
        None => state.inventory.check_low_stock(&sku).await?,
    };

    Ok(Json(check))
}
