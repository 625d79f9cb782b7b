//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                 - Health check
//!
//! # Catalog
//! GET    /products               - Product listing (public)
//! POST   /products               - Add product (admin)
//! PUT    /products/{id}          - Edit product (admin)
//! DELETE /products/{id}          - Remove product (admin)
//!
//! # Auth
//! POST   /auth/register          - Register a customer account
//! POST   /auth/login             - Login, returns {token, user}
//! GET    /auth/users             - List users (admin)
//! PUT    /auth/users/{id}        - Update a user (admin)
//! DELETE /auth/users/{id}        - Delete a non-admin user (admin)
//! PUT    /auth/profile           - Update own profile
//!
//! # Orders
//! POST   /orders                 - Checkout: cart -> order
//! GET    /orders                 - List orders (role-scoped)
//! PUT    /orders/{id}/status     - Overwrite order status (admin)
//!
//! # Admin
//! GET    /admin/stats            - Revenue and pending-count aggregates
//! ```

pub mod admin;
pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/{id}", put(products::update).delete(products::remove))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users", get(auth::list_users))
        .route(
            "/users/{id}",
            put(auth::update_user).delete(auth::delete_user),
        )
        .route("/profile", put(auth::update_profile))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::checkout).get(orders::list))
        .route("/{id}/status", put(orders::update_status))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/stats", get(admin::stats))
}

/// Assemble all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/auth", auth_routes())
        .nest("/orders", order_routes())
        .nest("/admin", admin_routes())
}
