//! Integration tests for Newa Bhojan.
//!
//! The tests build the real router with a seeded in-memory state and
//! drive it in-process with `tower::ServiceExt::oneshot` - no sockets, no
//! external services, so the suite runs anywhere `cargo test` does.
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, profile, and admin user management
//! - `orders` - Checkout and the order lifecycle
//! - `admin_dashboard` - Catalog management and dashboard aggregates

#![allow(clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use newa_bhojan_server::config::ServerConfig;
use newa_bhojan_server::{AppState, app, seed};

/// Seeded accounts from `seed::seed`.
pub const ADMIN_EMAIL: &str = "admin@newabhojan.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const CUSTOMER_EMAIL: &str = "customer@example.com";
pub const CUSTOMER_PASSWORD: &str = "customer123";

/// A fully assembled application with seeded in-memory state.
pub struct TestApp {
    router: Router,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::spawn()
    }
}

impl TestApp {
    /// Build a seeded application.
    #[must_use]
    pub fn spawn() -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("ip"),
            port: 0,
            jwt_secret: SecretString::from("kJ8#mP2$vN5@qR9!wX3^zL6&tY1*uB4%"),
        };
        let state = AppState::new(config);
        seed::seed(&state).expect("seed");

        Self { router: app(state) }
    }

    /// Send one request, returning the status and parsed JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/auth/login",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        body["token"].as_str().expect("token in response").to_owned()
    }

    /// Log in as the seeded admin.
    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Log in as the seeded customer.
    pub async fn customer_token(&self) -> String {
        self.login(CUSTOMER_EMAIL, CUSTOMER_PASSWORD).await
    }
}

/// A two-line cart used by checkout tests: Yomari x2 + Chatamari x1 = 680.
#[must_use]
pub fn sample_cart_items() -> Value {
    serde_json::json!([
        { "product_id": 1, "name": "Yomari", "price": 250, "quantity": 2 },
        { "product_id": 3, "name": "Chatamari", "price": 180, "quantity": 1 }
    ])
}

/// A valid checkout body around [`sample_cart_items`].
#[must_use]
pub fn sample_checkout_body() -> Value {
    serde_json::json!({
        "items": sample_cart_items(),
        "phone": "+977 9876543210",
        "address": "Lalitpur, Nepal",
        "payment_method": "cash"
    })
}
