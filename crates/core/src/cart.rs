//! The session-local cart reducer.
//!
//! A cart is a mapping from product to quantity held by the browsing
//! session, never persisted server-side. Items carry a snapshot of the
//! product's name and price so that a later catalog edit cannot change
//! what the customer saw when they added the item.
//!
//! # Invariants
//!
//! - At most one [`CartItem`] per product id: adding a product that is
//!   already present increments its quantity instead of appending.
//! - Every item has quantity >= 1: setting a quantity to zero removes
//!   the item entirely.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A single cart line: a product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: Price,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// The line subtotal (unit price times quantity).
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The cart state, mutated by add/update/remove operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended. Always succeeds.
    pub fn add(&mut self, product_id: ProductId, name: impl Into<String>, price: Price) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product_id,
                name: name.into(),
                price,
                quantity: 1,
            });
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line. No-op if the product is not
    /// in the cart.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line entirely. No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Sum of `price * quantity` across all lines. Pure, no side effects.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// The current cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop all lines. Called after a successful checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Build a cart from existing lines, merging duplicates.
    ///
    /// Used at the checkout boundary where the client submits its held
    /// cart: lines with the same product id are merged by summing their
    /// quantities (saturating at `u32::MAX`), and zero-quantity lines are
    /// dropped, so the invariants above hold regardless of what the client
    /// sent.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for line in items {
            if line.quantity == 0 {
                continue;
            }
            if let Some(existing) = cart
                .items
                .iter_mut()
                .find(|i| i.product_id == line.product_id)
            {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                cart.items.push(line);
            }
        }
        cart
    }
}
