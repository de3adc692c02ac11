//! Integration tests for the order CRUD routes.
//!
//! Run with: cargo test -p shopdesk-integration-tests

use reqwest::StatusCode;
use serde_json::{Value, json};
use shopdesk_integration_tests::TestContext;

/// Test helper: create a customer and return its id.
async fn create_customer(ctx: &TestContext, email: &str) -> i64 {
    let resp = ctx
        .client
        .post(ctx.url("/api/customers"))
        .json(&json!({ "name": "Ada", "surname": "Lovelace", "email": email }))
        .send()
        .await
        .expect("Failed to create customer");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("customer id is a number")
}

/// Test helper: create a shop item and return its id.
async fn create_item(ctx: &TestContext, title: &str) -> i64 {
    let resp = ctx
        .client
        .post(ctx.url("/api/shop-items"))
        .json(&json!({
            "title": title,
            "description": format!("{title} description"),
            "price": 9.99,
            "categoryIds": [],
        }))
        .send()
        .await
        .expect("Failed to create shop item");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("shop item id is a number")
}

/// Test helper: create an order and return the response body.
async fn create_order(ctx: &TestContext, customer_id: i64, items: Value) -> Value {
    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": customer_id, "items": items }))
        .send()
        .await
        .expect("Failed to create order");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse response")
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_order_crud_round_trip_with_snapshots() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;

    let created = create_order(
        &ctx,
        ada,
        json!([{ "shopItemId": mug, "quantity": 2 }]),
    )
    .await;

    assert_eq!(created["id"], 1);
    assert_eq!(created["customer"]["email"], "ada@example.com");
    assert_eq!(created["items"][0]["id"], 1);
    assert_eq!(created["items"][0]["quantity"], 2);
    assert_eq!(created["items"][0]["shopItem"]["title"], "Mug");
    assert_eq!(created["items"][0]["shopItem"]["price"], json!(9.99));

    let resp = ctx
        .client
        .get(ctx.url("/api/orders/1"))
        .send()
        .await
        .expect("Failed to get order");
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    let resp = ctx
        .client
        .delete(ctx.url("/api/orders/1"))
        .send()
        .await
        .expect("Failed to delete order");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .get(ctx.url("/api/orders/1"))
        .send()
        .await
        .expect("Failed to get deleted order");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn test_line_item_ids_are_unique_across_orders() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;

    let first = create_order(
        &ctx,
        ada,
        json!([
            { "shopItemId": mug, "quantity": 1 },
            { "shopItemId": mug, "quantity": 2 },
        ]),
    )
    .await;
    let second = create_order(&ctx, ada, json!([{ "shopItemId": mug, "quantity": 3 }])).await;

    assert_eq!(first["items"][0]["id"], 1);
    assert_eq!(first["items"][1]["id"], 2);
    assert_eq!(second["items"][0]["id"], 3);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_create_requires_customer_and_items() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": 1 }))
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "CustomerId and items are required");
}

#[tokio::test]
async fn test_create_rejects_incomplete_items() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;

    for items in [
        json!([{ "shopItemId": mug }]),
        json!([{ "quantity": 1 }]),
        json!([{ "shopItemId": mug, "quantity": 0 }]),
    ] {
        let resp = ctx
            .client
            .post(ctx.url("/api/orders"))
            .json(&json!({ "customerId": ada, "items": items }))
            .send()
            .await
            .expect("Failed to post order");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "Each item must have shopItemId and quantity");
    }
}

#[tokio::test]
async fn test_create_rejects_empty_item_list() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;

    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": ada, "items": [] }))
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Order must contain at least one item");
}

#[tokio::test]
async fn test_create_rejects_negative_quantity() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;

    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": ada, "items": [{ "shopItemId": mug, "quantity": -2 }] }))
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Item quantity must be greater than 0");
}

#[tokio::test]
async fn test_create_rejects_fractional_quantity() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;

    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": ada, "items": [{ "shopItemId": mug, "quantity": 1.5 }] }))
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_rejects_unresolved_references() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;

    // Unknown customer
    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": 42, "items": [{ "shopItemId": mug, "quantity": 1 }] }))
        .send()
        .await
        .expect("Failed to post order");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Customer with id 42 not found");

    // Unknown shop item; nothing must be stored
    let resp = ctx
        .client
        .post(ctx.url("/api/orders"))
        .json(&json!({ "customerId": ada, "items": [{ "shopItemId": 42, "quantity": 1 }] }))
        .send()
        .await
        .expect("Failed to post order");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Shop item with id 42 not found");

    let resp = ctx
        .client
        .get(ctx.url("/api/orders"))
        .send()
        .await
        .expect("Failed to list orders");
    let list: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(list, json!([]));
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_replaces_items_with_fresh_ids() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;
    create_order(
        &ctx,
        ada,
        json!([
            { "shopItemId": mug, "quantity": 1 },
            { "shopItemId": mug, "quantity": 2 },
        ]),
    )
    .await;

    let resp = ctx
        .client
        .put(ctx.url("/api/orders/1"))
        .json(&json!({ "items": [{ "shopItemId": mug, "quantity": 7 }] }))
        .send()
        .await
        .expect("Failed to put order");

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse response");
    // The order's own previous items still count toward the id maximum
    assert_eq!(updated["items"][0]["id"], 3);
    assert_eq!(updated["items"][0]["quantity"], 7);
    assert_eq!(updated["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_update_customer_keeps_items() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let grace = create_customer(&ctx, "grace@example.com").await;
    let mug = create_item(&ctx, "Mug").await;
    let created = create_order(&ctx, ada, json!([{ "shopItemId": mug, "quantity": 1 }])).await;

    let resp = ctx
        .client
        .put(ctx.url("/api/orders/1"))
        .json(&json!({ "customerId": grace }))
        .send()
        .await
        .expect("Failed to put order");

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(updated["customer"]["email"], "grace@example.com");
    assert_eq!(updated["items"], created["items"]);
}

#[tokio::test]
async fn test_update_requires_at_least_one_field() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;
    create_order(&ctx, ada, json!([{ "shopItemId": mug, "quantity": 1 }])).await;

    let resp = ctx
        .client
        .put(ctx.url("/api/orders/1"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to put order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "At least one field must be provided for update");
}

#[tokio::test]
async fn test_update_missing_order_is_404() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;

    let resp = ctx
        .client
        .put(ctx.url("/api/orders/999"))
        .json(&json!({ "customerId": ada }))
        .send()
        .await
        .expect("Failed to put order");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Order not found");
}

// ============================================================================
// Snapshot Tests
// ============================================================================

#[tokio::test]
async fn test_snapshots_ignore_later_source_edits() {
    let ctx = TestContext::new().await;
    let ada = create_customer(&ctx, "ada@example.com").await;
    let mug = create_item(&ctx, "Mug").await;
    create_order(&ctx, ada, json!([{ "shopItemId": mug, "quantity": 1 }])).await;

    let resp = ctx
        .client
        .put(ctx.url(&format!("/api/customers/{ada}")))
        .json(&json!({ "name": "Augusta" }))
        .send()
        .await
        .expect("Failed to put customer");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/api/shop-items/{mug}")))
        .send()
        .await
        .expect("Failed to delete shop item");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .get(ctx.url("/api/orders/1"))
        .send()
        .await
        .expect("Failed to get order");
    let fetched: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(fetched["customer"]["name"], "Ada");
    assert_eq!(fetched["items"][0]["shopItem"]["title"], "Mug");
}

// ============================================================================
// Request Shape Tests
// ============================================================================

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/orders/latest"))
        .send()
        .await
        .expect("Failed to get order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid order ID");
}
