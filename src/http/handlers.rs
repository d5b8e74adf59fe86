//! Request handlers. Each one is a thin call into a client facade.

use crate::http::AppState;
use crate::model::{
    Order, OrderCreate, OrderId, Product, ProductCreate, User, UserCreate, UserId,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// --- Users ---

pub async fn register_user(
    State(state): State<AppState>,
    Json(params): Json<UserCreate>,
) -> Result<(StatusCode, Json<User>), UserError> {
    let id = state.users.create_user(params).await?;
    let user = state.users.user(id).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<User>, UserError> {
    Ok(Json(state.users.user(UserId(id)).await?))
}

// --- Orders ---

pub async fn place_order(
    State(state): State<AppState>,
    Json(params): Json<OrderCreate>,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let id = state.orders.place_order(params).await?;
    let order = state.orders.order(id).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Order>, OrderError> {
    Ok(Json(state.orders.order(OrderId(id)).await?))
}

pub async fn deliver_order(
    State(state): State<AppState>,
    Path((order_id, customer_id)): Path<(u32, u32)>,
) -> Result<Json<Order>, OrderError> {
    let order = state
        .orders
        .deliver_order(OrderId(order_id), UserId(customer_id))
        .await?;
    Ok(Json(order))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path((order_id, customer_id)): Path<(u32, u32)>,
) -> Result<Json<Order>, OrderError> {
    let order = state
        .orders
        .cancel_order(OrderId(order_id), UserId(customer_id))
        .await?;
    Ok(Json(order))
}

pub async fn return_order(
    State(state): State<AppState>,
    Path((order_id, customer_id)): Path<(u32, u32)>,
) -> Result<Json<Order>, OrderError> {
    let order = state
        .orders
        .return_order(OrderId(order_id), UserId(customer_id))
        .await?;
    Ok(Json(order))
}

// --- Products ---

/// `GET /product/{code}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Product>, ProductError> {
    Ok(Json(state.products.product_by_code(&code).await?))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ProductError> {
    Ok(Json(state.products.products().await?))
}

/// `POST /product/{customerId}`
pub async fn add_product(
    State(state): State<AppState>,
    Path(customer_id): Path<u32>,
    Json(params): Json<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let code = params.code.trim().to_string();
    state.products.add_product(UserId(customer_id), params).await?;
    let product = state.products.product_by_code(&code).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /product/{customerId}`: the body's code picks the product, the other fields
/// replace its current values.
pub async fn update_product(
    State(state): State<AppState>,
    Path(customer_id): Path<u32>,
    Json(params): Json<ProductCreate>,
) -> Result<Json<Product>, ProductError> {
    let code = params.code.clone();
    let product = state
        .products
        .update_product(UserId(customer_id), &code, params.into())
        .await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path((code, customer_id)): Path<(String, u32)>,
) -> Result<StatusCode, ProductError> {
    state
        .products
        .delete_product(UserId(customer_id), &code)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct StockLevel {
    pub code: String,
    pub stock: u32,
}

pub async fn add_stock(
    State(state): State<AppState>,
    Path((code, quantity, customer_id)): Path<(String, u32, u32)>,
) -> Result<Json<StockLevel>, ProductError> {
    let stock = state
        .products
        .add_stock(UserId(customer_id), &code, quantity)
        .await?;
    Ok(Json(StockLevel { code, stock }))
}
