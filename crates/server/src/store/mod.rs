//! In-memory data stores.
//!
//! All state is process-memory only and is lost on restart. The stores are
//! exposed as traits so a persistent backend can be substituted without
//! touching the services; the bundled implementations in [`memory`] keep
//! everything in `RwLock`-guarded vectors with sequential ids.

pub mod memory;

pub use memory::{MemoryOrderStore, MemoryProductStore, MemoryUserStore};

use chrono::{DateTime, Utc};
use thiserror::Error;

use newa_bhojan_core::{
    Email, OrderId, OrderStatus, PaymentMethod, Price, ProductId, Role, UserId,
};

use crate::models::{CustomerInfo, Order, OrderLine, Product, User};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Fields for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub stock: u32,
    pub featured: bool,
}

/// Partial update of a product; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub featured: Option<bool>,
}

/// Fields for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial update of a user; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: Option<String>,
}

/// Fields for creating an order. The store assigns the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderLine>,
    pub total: Price,
    pub status: OrderStatus,
    pub customer_info: CustomerInfo,
    pub payment_method: PaymentMethod,
}

/// Catalog store.
pub trait ProductStore: Send + Sync {
    /// All products, in insertion order.
    fn list(&self) -> Vec<Product>;

    /// Look up a product by id.
    fn get(&self, id: ProductId) -> Option<Product>;

    /// Add a product, assigning the next id.
    fn create(&self, input: NewProduct) -> Product;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no product has the given id.
    fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, StoreError>;

    /// Remove a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no product has the given id.
    fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}

/// Credential store.
pub trait UserStore: Send + Sync {
    /// All users, in insertion order. Callers must strip password hashes
    /// before anything crosses the API boundary.
    fn list(&self) -> Vec<User>;

    /// Look up a user by id.
    fn get(&self, id: UserId) -> Option<User>;

    /// Look up a user by email.
    fn get_by_email(&self, email: &Email) -> Option<User>;

    /// Add a user, assigning the next id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the email is already registered.
    fn create(&self, input: NewUser) -> Result<User, StoreError>;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has the given id, or
    /// [`StoreError::Conflict`] if the new email belongs to another user.
    fn update(&self, id: UserId, update: UserUpdate) -> Result<User, StoreError>;

    /// Remove a user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has the given id.
    fn delete(&self, id: UserId) -> Result<(), StoreError>;
}

/// Order store.
pub trait OrderStore: Send + Sync {
    /// All orders, newest first.
    fn list(&self) -> Vec<Order>;

    /// Orders placed by a single user, newest first.
    fn list_for_user(&self, user_id: UserId) -> Vec<Order>;

    /// Look up an order by id.
    fn get(&self, id: OrderId) -> Option<Order>;

    /// Store a new order, assigning the next id and creation timestamp.
    fn create(&self, input: NewOrder) -> Order;

    /// Overwrite an order's status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no order has the given id.
    fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, StoreError>;
}

/// Current UTC timestamp, shared by the memory stores.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}
