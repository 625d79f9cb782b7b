//! Status and role enums for domain entities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Coarse authorization role carried in the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access: manage products, users, and all orders.
    Admin,
    /// Regular shopper: browse, order, and manage their own profile.
    #[default]
    Customer,
}

impl Role {
    /// Whether this role grants admin access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

/// Order fulfillment status.
///
/// Transitions are admin-driven and unconstrained: any status can be
/// overwritten with any other. The forward path
/// pending -> confirmed -> preparing -> delivered is convention, not
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// How the customer pays for an order.
///
/// `Esewa` and `Khalti` are digital wallets that require an external
/// confirmation step; `Cash` is collected on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Esewa,
    Khalti,
}

impl PaymentMethod {
    /// Whether this method settles through an external wallet gateway.
    #[must_use]
    pub const fn requires_gateway(self) -> bool {
        matches!(self, Self::Esewa | Self::Khalti)
    }
}
