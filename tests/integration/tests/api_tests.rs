//! API Integration Tests
//!
//! Each test spawns the full Axum application on a local port, backed by a
//! fresh in-memory store, and drives it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, audit_path, fixtures::*, product_path, stock_path, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

async fn create(server: &TestServer, request: &CreateProduct) -> Product {
    let response = server.post("/products", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn audit_logs(server: &TestServer, id: impl std::fmt::Display) -> Vec<AuditLog> {
    let response = server.get(&audit_path(id)).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn fetch(server: &TestServer, id: Uuid) -> Product {
    let response = server.get(&product_path(id)).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");

    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "message": "Inventory API is running!" }));
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .get(format!("{}/health", server.base_url()))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
async fn test_list_products_starts_empty() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/products").await.unwrap();
    let products: Vec<Product> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_product() {
    let server = TestServer::start().await.unwrap();
    let request = CreateProduct::unique(7);

    let response = server.post("/products", &request).await.unwrap();
    assert_eq!(response.headers()["x-audit-status"], "recorded");
    let product: Product = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(product.name, request.name);
    assert_eq!(product.stock_quantity, 7);
    assert_eq!(product.low_stock_threshold, 10);
    assert_eq!(product.created_at, product.updated_at);

    let logs = audit_logs(&server, product.id).await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action_type, "CREATE");
    assert!(logs[0].old_values.is_none());
    assert_eq!(logs[0].new_values.as_ref().unwrap()["stock_quantity"], 7);
}

#[tokio::test]
async fn test_list_products_oldest_first() {
    let server = TestServer::start().await.unwrap();
    let first = create(&server, &CreateProduct::unique(1)).await;
    let second = create(&server, &CreateProduct::unique(2)).await;

    let response = server.get("/products").await.unwrap();
    let products: Vec<Product> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_create_product_missing_fields() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/products", &json!({ "name": "Widget" }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.code, "VALIDATION_ERROR");
    assert_eq!(body.error, "Name, description, and stock quantity are required");
}

#[tokio::test]
async fn test_create_product_negative_stock() {
    let server = TestServer::start().await.unwrap();
    let mut request = CreateProduct::unique(0);
    request.stock_quantity = -1;

    let response = server.post("/products", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "Stock quantity cannot be negative");

    let response = server.get("/products").await.unwrap();
    let products: Vec<Product> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_product_malformed_json() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_raw("/products", "application/json", "{\"name\": ")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_get_product() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateProduct::unique(3)).await;

    assert_eq!(fetch(&server, created.id).await, created);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.get(&product_path(Uuid::new_v4())).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error, "Product not found");
    assert_eq!(body.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_get_product_invalid_id() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/products/12345").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_update_product() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateProduct::unique(3)).await;

    let response = server
        .put(
            &product_path(created.id),
            &json!({ "name": "Renamed", "low_stock_threshold": 2 }),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-audit-status"], "recorded");
    let updated: Product = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.low_stock_threshold, 2);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(fetch(&server, created.id).await, updated);

    let logs = audit_logs(&server, created.id).await;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].action_type, "UPDATE");
    assert_eq!(logs[0].old_values.as_ref().unwrap()["name"], created.name.as_str());
    assert_eq!(logs[0].new_values.as_ref().unwrap()["name"], "Renamed");
}

#[tokio::test]
async fn test_update_product_rejects_empty_name() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateProduct::unique(3)).await;

    let response = server
        .put(&product_path(created.id), &json!({ "name": "" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(fetch(&server, created.id).await, created);
    assert_eq!(audit_logs(&server, created.id).await.len(), 1);
}

#[tokio::test]
async fn test_blank_and_empty_names_share_error_message() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateProduct::unique(3)).await;

    for name in ["", "   "] {
        let response = server
            .put(&product_path(created.id), &json!({ "name": name }))
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error, "Name and description cannot be empty");
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    assert_eq!(fetch(&server, created.id).await, created);
}

#[tokio::test]
async fn test_update_product_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put(&product_path(Uuid::new_v4()), &json!({ "name": "x" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_product_returns_deleted_record() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &CreateProduct::unique(4)).await;

    let response = server.delete(&product_path(created.id)).await.unwrap();
    let deleted: Product = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted, created);

    let response = server.get(&product_path(created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Entries outlive the product; the name is no longer resolvable
    let logs = audit_logs(&server, created.id).await;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].action_type, "DELETE");
    assert!(logs[0].new_values.is_none());
    assert!(logs[0].product_name.is_none());
}

#[tokio::test]
async fn test_delete_product_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.delete(&product_path(Uuid::new_v4())).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Stock Tests
// ============================================================================

#[tokio::test]
async fn test_low_stock_then_restock() {
    let server = TestServer::start().await.unwrap();
    let widget = create(&server, &CreateProduct::widget()).await;
    create(&server, &CreateProduct::unique(50)).await;

    let response = server.get("/products/low-stock").await.unwrap();
    let low: Vec<Product> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].id, widget.id);

    let response = server
        .post(&stock_path(widget.id, "increase"), &Amount { amount: 10 })
        .await
        .unwrap();
    assert_eq!(response.headers()["x-audit-status"], "recorded");
    let restocked: Product = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(restocked.stock_quantity, 15);

    let response = server.get("/products/low-stock").await.unwrap();
    let low: Vec<Product> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(low.is_empty());

    let logs = audit_logs(&server, widget.id).await;
    assert_eq!(logs.len(), 2);
    let increase = &logs[0];
    assert_eq!(increase.action_type, "STOCK_INCREASE");
    assert_eq!(increase.product_name.as_deref(), Some("Widget"));
    assert_eq!(increase.product_id, widget.id);
    assert_eq!(
        increase.old_values.as_ref().unwrap(),
        &json!({ "stock_quantity": 5 })
    );
    assert_eq!(
        increase.new_values.as_ref().unwrap(),
        &json!({ "stock_quantity": 15, "amount_increased": 10 })
    );
}

#[tokio::test]
async fn test_decrease_insufficient_stock() {
    let server = TestServer::start().await.unwrap();
    let widget = create(&server, &CreateProduct::widget()).await;

    let response = server
        .post(&stock_path(widget.id, "decrease"), &Amount { amount: 10 })
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error, "Insufficient stock");
    assert_eq!(body.code, "INSUFFICIENT_STOCK");
    assert_eq!(body.context["currentStock"], 5);
    assert_eq!(body.context["requestedAmount"], 10);

    assert_eq!(fetch(&server, widget.id).await.stock_quantity, 5);
    assert_eq!(audit_logs(&server, widget.id).await.len(), 1);
}

#[tokio::test]
async fn test_decrease_to_zero() {
    let server = TestServer::start().await.unwrap();
    let widget = create(&server, &CreateProduct::widget()).await;

    let response = server
        .post(&stock_path(widget.id, "decrease"), &Amount { amount: 5 })
        .await
        .unwrap();
    let product: Product = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(product.stock_quantity, 0);

    let logs = audit_logs(&server, widget.id).await;
    assert_eq!(logs[0].action_type, "STOCK_DECREASE");
    assert_eq!(
        logs[0].new_values.as_ref().unwrap(),
        &json!({ "stock_quantity": 0, "amount_decreased": 5 })
    );
}

#[tokio::test]
async fn test_increase_then_decrease_restores_quantity() {
    let server = TestServer::start().await.unwrap();
    let product = create(&server, &CreateProduct::unique(8)).await;

    let response = server
        .post(&stock_path(product.id, "increase"), &Amount { amount: 3 })
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server
        .post(&stock_path(product.id, "decrease"), &Amount { amount: 3 })
        .await
        .unwrap();
    let after: Product = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(after.stock_quantity, 8);

    let actions: Vec<String> = audit_logs(&server, product.id)
        .await
        .into_iter()
        .map(|log| log.action_type)
        .collect();
    assert_eq!(actions, vec!["STOCK_DECREASE", "STOCK_INCREASE", "CREATE"]);
}

#[tokio::test]
async fn test_stock_amount_must_be_positive() {
    let server = TestServer::start().await.unwrap();
    let product = create(&server, &CreateProduct::unique(8)).await;

    for body in [json!({ "amount": 0 }), json!({ "amount": -4 }), json!({})] {
        for direction in ["increase", "decrease"] {
            let response = server
                .post(&stock_path(product.id, direction), &body)
                .await
                .unwrap();
            let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
            assert_eq!(error.error, "Amount must be a positive number");
        }
    }

    assert_eq!(fetch(&server, product.id).await.stock_quantity, 8);
    assert_eq!(audit_logs(&server, product.id).await.len(), 1);
}

#[tokio::test]
async fn test_stock_unknown_product() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(&stock_path(Uuid::new_v4(), "increase"), &Amount { amount: 1 })
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error, "Product not found");
}

#[tokio::test]
async fn test_concurrent_decreases_never_oversell() {
    let server = TestServer::start().await.unwrap();
    let product = create(&server, &CreateProduct::unique(10)).await;
    let path = stock_path(product.id, "decrease");

    let requests = (0..20).map(|_| {
        let client = server.client.clone();
        let url = format!("{}{}", server.base_url(), path);
        tokio::spawn(async move { client.post(url).json(&Amount { amount: 1 }).send().await })
    });

    let mut ok = 0;
    let mut refused = 0;
    for handle in requests.collect::<Vec<_>>() {
        match handle.await.unwrap().unwrap().status() {
            StatusCode::OK => ok += 1,
            StatusCode::BAD_REQUEST => refused += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(ok, 10);
    assert_eq!(refused, 10);
    assert_eq!(fetch(&server, product.id).await.stock_quantity, 0);
    assert_eq!(audit_logs(&server, product.id).await.len(), 11);
}

// ============================================================================
// Audit Log Tests
// ============================================================================

#[tokio::test]
async fn test_audit_logs_invalid_id_is_empty() {
    let server = TestServer::start().await.unwrap();

    let response = server.get(&audit_path("not-a-uuid")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_audit_logs_unknown_id_is_empty() {
    let server = TestServer::start().await.unwrap();
    assert!(audit_logs(&server, Uuid::new_v4()).await.is_empty());
}

#[tokio::test]
async fn test_audit_failure_keeps_mutation() {
    let server = TestServer::start_with_failing_audit().await.unwrap();

    let response = server
        .post("/products", &CreateProduct::widget())
        .await
        .unwrap();
    assert_eq!(response.headers()["x-audit-status"], "failed");
    let product: Product = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(&stock_path(product.id, "increase"), &Amount { amount: 2 })
        .await
        .unwrap();
    assert_eq!(response.headers()["x-audit-status"], "failed");
    let product: Product = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(product.stock_quantity, 7);

    assert_eq!(fetch(&server, product.id).await.stock_quantity, 7);
    assert!(audit_logs(&server, product.id).await.is_empty());
}
