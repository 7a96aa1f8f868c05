//--------------------------------------------------------------------------------------------------
// TEST MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module contains integration tests for the API.
// It tests all endpoints and verifies the responses.
//--------------------------------------------------------------------------------------------------

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use hyper::Response;
use serde_json::{from_slice, json, Value};
use tower::ServiceExt;

use order_intake::{Api, AppState, OrderIntakeServiceImpl, SequentialOrderIdGenerator};

/// Sets up a test router with a default app state.
fn setup_test_router() -> Router {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    Api::new(addr, AppState::default()).routes()
}

/// Sets up a test router whose order ids are sequential.
fn setup_sequential_router() -> Router {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let intake = OrderIntakeServiceImpl::new(Box::new(SequentialOrderIdGenerator::new()));
    Api::new(addr, AppState::new(Arc::new(intake))).routes()
}

/// Helper to parse JSON responses
async fn parse_json_response(response: Response<Body>) -> Value {
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024) // 1MB limit
        .await
        .unwrap();

    from_slice(&body_bytes).unwrap()
}

/// Helper to POST a JSON body to /orders
async fn post_order(app: &Router, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::post("/orders")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_test_router();

    for path in ["/health", "/"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
        assert_eq!(parse_json_response(response).await, json!({"status": "ok"}));
    }
}

#[tokio::test]
async fn test_create_order_flow() {
    let app = setup_test_router();

    let response = post_order(&app, json!({"item_id": "PS-101", "quantity": 2, "price": 50.0})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_json_response(response).await;
    assert!(body["order_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["total_price"], 100.0);
}

#[tokio::test]
async fn test_create_order_fractional_prices() {
    let app = setup_test_router();

    let response = post_order(&app, json!({"item_name": "Laptop", "quantity": 2, "price": 1000.50})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_json_response(response).await;
    assert_eq!(body["total_price"], 2001.0);
    assert_eq!(body["item"], "Laptop");
    assert_eq!(body["unit_price"], 1000.5);

    let response = post_order(&app, json!({"item_id": "ITM-9988", "quantity": 5, "price": 20.5})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_json_response(response).await;
    assert_eq!(body["total_price"], 102.5);
    assert_eq!(body["quantity"], 5);
}

#[tokio::test]
async fn test_create_order_negative_quantity() {
    let app = setup_test_router();

    let response = post_order(&app, json!({"item_name": "Bad Item", "quantity": -5, "price": 100})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_json_response(response).await;
    assert!(body.get("total_price").is_none());
    assert_eq!(body["error"]["code"], 422);
    assert_eq!(body["error"]["details"][0]["field"], "quantity");
    assert_eq!(body["error"]["details"][0]["kind"], "constraint");
}

#[tokio::test]
async fn test_create_order_reports_every_field() {
    let app = setup_test_router();

    let response = post_order(&app, json!({"item": "", "quantity": "3", "price": -1})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_json_response(response).await;
    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["item", "quantity", "price"]);
}

#[tokio::test]
async fn test_create_order_missing_fields() {
    let app = setup_test_router();

    let response = post_order(&app, json!({"quantity": 1})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_json_response(response).await;
    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details.iter().all(|d| d["kind"] == "missing"));
}

#[tokio::test]
async fn test_create_order_malformed_json() {
    let app = setup_test_router();

    let response = app
        .clone()
        .oneshot(
            Request::post("/orders")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"item\": \"PS-101\", \"quantity\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_json_response(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Malformed request"));
}

#[tokio::test]
async fn test_create_order_without_content_type() {
    let app = setup_test_router();

    let response = app
        .clone()
        .oneshot(
            Request::post("/orders")
                .body(Body::from(json!({"item": "A", "quantity": 1, "price": 1}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_repeated_orders_get_new_ids() {
    let app = setup_test_router();
    let payload = json!({"item": "PS-101", "quantity": 1, "price": 9.99});

    let mut ids = HashSet::new();
    for _ in 0..5 {
        let response = post_order(&app, payload.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_json_response(response).await;
        ids.insert(body["order_id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_sequential_ids_over_http() {
    let app = setup_sequential_router();
    let payload = json!({"item": "PS-101", "quantity": 1, "price": 1});

    let first = parse_json_response(post_order(&app, payload.clone()).await).await;
    let second = parse_json_response(post_order(&app, payload).await).await;

    assert_eq!(first["order_id"], "ORD-00000001");
    assert_eq!(second["order_id"], "ORD-00000002");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = setup_test_router();

    let response = app
        .oneshot(Request::get("/transactions").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_json_response(response).await;
    assert_eq!(body["error"]["code"], 404);
    assert_eq!(body["error"]["message"], "Resource not found: No route for /transactions");
    assert_eq!(body["error"]["details"], json!([]));
}
