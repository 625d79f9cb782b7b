//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use newa_bhojan_core::{Price, ProductId};

use crate::error::{ApiError, Result};
use crate::middleware::RequireAdmin;
use crate::models::Product;
use crate::state::AppState;
use crate::store::{NewProduct, ProductUpdate, StoreError};

/// Payload for adding a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub featured: bool,
}

/// Payload for editing a product; absent fields are left unchanged.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub featured: Option<bool>,
}

/// GET /products - the full catalog, public.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products().list())
}

/// POST /products - add a menu item (admin).
pub async fn create(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.products().create(NewProduct {
        name: body.name,
        description: body.description,
        price: body.price,
        image: body.image,
        category: body.category,
        stock: body.stock,
        featured: body.featured,
    });

    tracing::info!(product_id = %product.id, name = %product.name, "Product added");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id} - edit a menu item (admin).
pub async fn update(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    let product = state
        .products()
        .update(
            ProductId::new(id),
            ProductUpdate {
                name: body.name,
                description: body.description,
                price: body.price,
                image: body.image,
                category: body.category,
                stock: body.stock,
                featured: body.featured,
            },
        )
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::NotFound("Product".to_owned()),
            other => ApiError::Store(other),
        })?;

    Ok(Json(product))
}

/// DELETE /products/{id} - remove a menu item (admin).
pub async fn remove(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    state
        .products()
        .delete(ProductId::new(id))
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::NotFound("Product".to_owned()),
            other => ApiError::Store(other),
        })?;

    Ok(Json(serde_json::json!({ "message": "Product deleted" })))
}
