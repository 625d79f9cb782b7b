//! Domain types for the ordering backend.
//!
//! These types represent validated domain objects separate from the wire
//! payloads defined alongside the route handlers.

pub mod order;
pub mod product;
pub mod user;

pub use order::{CustomerInfo, Order, OrderLine};
pub use product::Product;
pub use user::{PublicUser, User};
