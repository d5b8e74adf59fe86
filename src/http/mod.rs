//! # REST API
//!
//! | Method | Path                                    | Operation        |
//! |--------|-----------------------------------------|------------------|
//! | POST   | /user                                   | register user    |
//! | GET    | /user/{id}                              | fetch user       |
//! | POST   | /order                                  | place order      |
//! | GET    | /order/{orderId}                        | fetch order      |
//! | PATCH  | /order/{orderId}/{customerId}           | deliver          |
//! | PATCH  | /order/cancel/{orderId}/{customerId}    | cancel           |
//! | PATCH  | /order/return/{orderId}/{customerId}    | return           |
//! | GET    | /product                                | list products    |
//! | GET    | /product/{code}                         | product by code  |
//! | POST   | /product/{customerId}                   | add product      |
//! | PUT    | /product/{customerId}                   | update product   |
//! | DELETE | /product/{code}/{customerId}            | delete product   |
//! | PATCH  | /product/{code}/{quantity}/{customerId} | add stock        |
//!
//! The router keeps one parameter name per path position, so the product routes use
//! neutral names (`{key}`, `{arg}`) and the handlers extract by position:
//! `GET /product/{code}` and `POST|PUT /product/{customerId}` are one route.

pub mod error;
pub mod handlers;

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::lifecycle::ShopSystem;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Clients shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
    pub orders: OrderClient,
}

impl From<&ShopSystem> for AppState {
    fn from(system: &ShopSystem) -> Self {
        Self {
            users: system.user_client.clone(),
            products: system.product_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/user", post(handlers::register_user))
        .route("/user/{id}", get(handlers::get_user))
        .route("/order", post(handlers::place_order))
        .route("/order/{order_id}", get(handlers::get_order))
        .route(
            "/order/{order_id}/{customer_id}",
            patch(handlers::deliver_order),
        )
        .route(
            "/order/cancel/{order_id}/{customer_id}",
            patch(handlers::cancel_order),
        )
        .route(
            "/order/return/{order_id}/{customer_id}",
            patch(handlers::return_order),
        )
        .route("/product", get(handlers::list_products))
        .route(
            "/product/{key}",
            get(handlers::get_product)
                .post(handlers::add_product)
                .put(handlers::update_product),
        )
        .route("/product/{key}/{arg}", delete(handlers::delete_product))
        .route(
            "/product/{key}/{arg}/{customer_id}",
            patch(handlers::add_stock),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
