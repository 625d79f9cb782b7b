//! Product domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use newa_bhojan_core::{Price, ProductId};

/// A menu item in the catalog.
///
/// Immutable once seeded except via admin edit. The password-free shape
/// is safe to serialize straight to the storefront.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Unit price in whole rupees.
    pub price: Price,
    /// Path to the product image.
    pub image: String,
    /// Menu category (e.g. "Snacks", "Main Course").
    pub category: String,
    /// Units currently in stock.
    pub stock: u32,
    /// Whether the item is highlighted on the home page.
    pub featured: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}
