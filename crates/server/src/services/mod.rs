//! Business services over the stores.
//!
//! Services hold the rules; stores hold the data. Route handlers construct
//! a service borrowing the state's stores, call one operation, and map the
//! service error into an HTTP response via `ApiError`.

pub mod auth;
pub mod orders;
pub mod payment;
pub mod token;
