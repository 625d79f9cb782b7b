//! Type-safe price representation in whole rupees.
//!
//! Menu prices are whole Nepalese rupees with no fractional component, so
//! prices are stored as an integer amount rather than a decimal type.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in whole rupees (NPR).
///
/// Arithmetic saturates rather than wrapping; a cart large enough to
/// overflow `i64` rupees is not a realistic order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn from_rupees(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole rupees.
    #[must_use]
    pub const fn as_rupees(&self) -> i64 {
        self.0
    }

    /// Multiply this price by a line quantity.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rs. {}", self.0)
    }
}
