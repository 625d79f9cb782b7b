//! Newa Bhojan Core - Shared domain types.
//!
//! This crate provides common types used across all Newa Bhojan components:
//! - `server` - REST API backend serving the storefront and admin dashboard
//! - `integration-tests` - End-to-end tests against the assembled router
//!
//! # Architecture
//!
//! The core crate contains only types and pure state - no I/O, no HTTP,
//! no hashing or token signing. This keeps it lightweight and allows it to
//! be used anywhere, including inside the browser-facing contract types.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`cart`] - The session-local cart reducer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartItem};
pub use types::*;
