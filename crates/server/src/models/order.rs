//! Order domain types.
//!
//! An order is a finalized snapshot of a cart plus delivery and payment
//! metadata. Line items freeze the product name and price at checkout
//! time, so later catalog edits never change a placed order.

use chrono::{DateTime, Utc};
use serde::Serialize;

use newa_bhojan_core::{CartItem, OrderId, OrderStatus, PaymentMethod, Price, ProductId, UserId};

/// A single ordered line, frozen at checkout time.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    /// The product this line was created from.
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub name: String,
    /// Unit price at checkout time.
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
}

impl OrderLine {
    /// The line subtotal.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Contact and delivery details captured at checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A placed order.
///
/// Invariant: `total` equals the sum of line subtotals at creation time.
/// The status is mutable (admin-driven); everything else is frozen.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The user who placed the order (weak reference by id).
    pub user_id: UserId,
    /// Line items snapshotted from the cart.
    pub items: Vec<OrderLine>,
    /// Computed total at creation time.
    pub total: Price,
    /// Current fulfillment status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Contact and delivery details.
    pub customer_info: CustomerInfo,
    /// How the order is paid.
    pub payment_method: PaymentMethod,
}
