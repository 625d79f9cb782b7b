//! Integration tests for catalog management and dashboard aggregates.

use axum::http::StatusCode;
use serde_json::json;

use newa_bhojan_integration_tests::{TestApp, sample_checkout_body};

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_product_listing_is_public_and_seeded() {
    let app = TestApp::spawn();

    let (status, products) = app.request("GET", "/products", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let products = products.as_array().expect("products");
    assert_eq!(products.len(), 14);

    let yomari = products
        .iter()
        .find(|p| p["name"] == "Yomari")
        .expect("Yomari in menu");
    assert_eq!(yomari["price"], 250);
    assert_eq!(yomari["featured"], true);
    // Hashes never leak through any listing.
    assert!(yomari.get("password_hash").is_none());
}

#[tokio::test]
async fn test_product_crud_is_admin_gated() {
    let app = TestApp::spawn();
    let customer = app.customer_token().await;

    let new_product = json!({
        "name": "Haku Chhoila",
        "description": "Smoky grilled buffalo meat",
        "price": 400,
        "image": "https://example.com/haku-chhoila.jpg",
        "category": "Main Course",
        "stock": 20,
        "featured": false
    });

    let (status, _) = app
        .request("POST", "/products", None, Some(new_product.clone()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request("POST", "/products", Some(&customer), Some(new_product))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_product_lifecycle() {
    let app = TestApp::spawn();
    let admin = app.admin_token().await;

    let (status, created) = app
        .request(
            "POST",
            "/products",
            Some(&admin),
            Some(json!({
                "name": "Haku Chhoila",
                "description": "Smoky grilled buffalo meat",
                "price": 400,
                "image": "https://example.com/haku-chhoila.jpg",
                "category": "Main Course",
                "stock": 20,
                "featured": false
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    assert_eq!(created["id"], 15);
    assert_eq!(created["price"], 400);

    let (status, updated) = app
        .request(
            "PUT",
            "/products/15",
            Some(&admin),
            Some(json!({ "price": 450, "stock": 15 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 450);
    assert_eq!(updated["stock"], 15);
    assert_eq!(updated["name"], "Haku Chhoila");

    let (status, _) = app.request("DELETE", "/products/15", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, products) = app.request("GET", "/products", None, None).await;
    assert_eq!(products.as_array().expect("products").len(), 14);
}

#[tokio::test]
async fn test_missing_product_is_404() {
    let app = TestApp::spawn();
    let admin = app.admin_token().await;

    let (status, body) = app
        .request(
            "PUT",
            "/products/999",
            Some(&admin),
            Some(json!({ "price": 100 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");

    let (status, _) = app.request("DELETE", "/products/999", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Dashboard aggregates
// ============================================================================

#[tokio::test]
async fn test_stats_count_only_delivered_revenue() {
    let app = TestApp::spawn();
    let customer = app.customer_token().await;
    let admin = app.admin_token().await;

    let (status, stats) = app.request("GET", "/admin/stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_revenue"], 0);
    assert_eq!(stats["pending_count"], 0);

    // Two orders placed: revenue stays zero while both are pending.
    let (_, first) = app
        .request("POST", "/orders", Some(&customer), Some(sample_checkout_body()))
        .await;
    app.request("POST", "/orders", Some(&customer), Some(sample_checkout_body()))
        .await;

    let (_, stats) = app.request("GET", "/admin/stats", Some(&admin), None).await;
    assert_eq!(stats["total_revenue"], 0);
    assert_eq!(stats["pending_count"], 2);

    // Deliver the first: its total moves into revenue, pending drops.
    let first_id = first["id"].as_i64().expect("id");
    app.request(
        "PUT",
        &format!("/orders/{first_id}/status"),
        Some(&admin),
        Some(json!({ "status": "delivered" })),
    )
    .await;

    let (_, stats) = app.request("GET", "/admin/stats", Some(&admin), None).await;
    assert_eq!(stats["total_revenue"], 680);
    assert_eq!(stats["pending_count"], 1);
}

#[tokio::test]
async fn test_stats_require_admin() {
    let app = TestApp::spawn();
    let customer = app.customer_token().await;

    let (status, _) = app.request("GET", "/admin/stats", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.request("GET", "/admin/stats", Some(&customer), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied");
}
