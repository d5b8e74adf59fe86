//! Handler tests for the REST API
//!
//! These drive the real router (and the real actors behind it) with
//! `tower::ServiceExt::oneshot`, checking status codes, JSON field names and the
//! plain-text error bodies.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use online_shop::http::{self, AppState};
use online_shop::lifecycle::ShopSystem;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

struct TestApp {
    router: Router,
    system: ShopSystem,
}

impl TestApp {
    fn new() -> Self {
        let system = ShopSystem::new(16);
        let router = http::router(AppState::from(&system));
        Self { router, system }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn text(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, String::from_utf8(bytes).unwrap())
    }

    async fn register(&self, role: &str) -> u64 {
        let (status, user) = self
            .json(
                "POST",
                "/user",
                Some(json!({
                    "firstName": "Maria",
                    "surname": "Stan",
                    "roles": [role],
                    "address": {
                        "city": "Sibiu",
                        "street": "Nicolae Balcescu",
                        "number": 7,
                        "zipcode": "550159"
                    }
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        user["id"].as_u64().unwrap()
    }

    async fn shutdown(self) {
        drop(self.router);
        self.system.shutdown().await.unwrap();
    }
}

fn product_body(code: &str, stock: u32) -> Value {
    json!({
        "code": code,
        "description": "Tricou",
        "price": 79.5,
        "currency": "RON",
        "stock": stock,
        "valid": true
    })
}

const ACCESS_DENIED: &str = "Utilizatorul nu are permisiunea de a executa aceasta operatiune!";

#[tokio::test]
async fn test_order_lifecycle_over_http() {
    let app = TestApp::new();
    let admin = app.register("ADMIN").await;
    let client = app.register("CLIENT").await;
    let expeditor = app.register("EXPEDITOR").await;

    let (status, product) = app
        .json("POST", &format!("/product/{}", admin), Some(product_body("TRICOU-M", 1)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = product["id"].as_u64().unwrap();

    let mut items = serde_json::Map::new();
    items.insert(product_id.to_string(), json!(1));
    let (status, order) = app
        .json(
            "POST",
            "/order",
            Some(json!({ "userId": client, "productsIdsToQuantity": items })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["items"][0]["quantity"], 1);
    let order_id = order["id"].as_u64().unwrap();

    let (status, order) = app
        .json("PATCH", &format!("/order/{}/{}", order_id, expeditor), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["delivered"], true);

    let (status, order) = app
        .json("PATCH", &format!("/order/return/{}/{}", order_id, client), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["returned"], true);

    let (_, product) = app.json("GET", "/product/TRICOU-M", None).await;
    assert_eq!(product["stock"], 1);

    let (status, body) = app
        .text("PATCH", &format!("/order/return/{}/{}", order_id, client), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Comanda a fost deja returnata!");

    app.shutdown().await;
}

#[tokio::test]
async fn test_domain_errors_are_plain_text_bad_requests() {
    let app = TestApp::new();
    let admin = app.register("ADMIN").await;
    let client = app.register("CLIENT").await;

    let (status, body) = app
        .text(
            "POST",
            "/order",
            Some(json!({ "userId": admin, "productsIdsToQuantity": {} })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Comanda dumneavoastra nu contine niciun produs!");

    let (status, body) = app
        .text(
            "POST",
            "/order",
            Some(json!({ "userId": 999, "productsIdsToQuantity": { "1": 1 } })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Comanda dumneavoastra nu este asignata unui user valid!");

    let (status, body) = app
        .text(
            "POST",
            "/order",
            Some(json!({ "userId": admin, "productsIdsToQuantity": { "1": 1 } })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ACCESS_DENIED);

    let (status, body) = app
        .text(
            "POST",
            "/order",
            Some(json!({ "userId": client, "productsIdsToQuantity": { "42": 1 } })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Id-ul unui produs nu este valid in comanda curenta!");

    let (status, body) = app.text("GET", "/order/77", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Id-ul comenzii nu este valid!");

    let (status, body) = app.text("GET", "/product/NOPE", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Codul produsului trimis este invalid!");

    app.shutdown().await;
}

#[tokio::test]
async fn test_product_routes() {
    let app = TestApp::new();
    let admin = app.register("ADMIN").await;
    let editor = app.register("EDITOR").await;

    let (status, body) = app
        .text("POST", &format!("/product/{}", editor), Some(product_body("TRICOU-L", 3)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ACCESS_DENIED);

    let (status, _) = app
        .json("POST", &format!("/product/{}", admin), Some(product_body("TRICOU-L", 3)))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .text("POST", &format!("/product/{}", admin), Some(product_body("TRICOU-L", 9)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Codul produsului exista deja!");

    let mut changed = product_body("TRICOU-L", 4);
    changed["price"] = json!(15.0);
    changed["currency"] = json!("EUR");
    let (status, product) = app
        .json("PUT", &format!("/product/{}", editor), Some(changed))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["currency"], "EUR");
    assert_eq!(product["stock"], 4);

    let (status, level) = app
        .json("PATCH", &format!("/product/TRICOU-L/6/{}", admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(level["stock"], 10);

    let (status, list) = app.json("GET", "/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app
        .send("DELETE", &format!("/product/TRICOU-L/{}", admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send("GET", "/product/TRICOU-L", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    app.shutdown().await;
}

#[tokio::test]
async fn test_user_routes() {
    let app = TestApp::new();
    let id = app.register("CLIENT").await;

    let (status, user) = app.json("GET", &format!("/user/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["firstName"], "Maria");
    assert_eq!(user["roles"][0], "CLIENT");

    let (status, _) = app.send("GET", "/user/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.shutdown().await;
}
