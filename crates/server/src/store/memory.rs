//! In-memory store implementations.
//!
//! Each store is a `RwLock`-guarded vector plus a sequential id counter,
//! matching the demonstration-scale resource model: single process, no
//! transaction boundary, volatile across restarts.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use newa_bhojan_core::{Email, OrderId, OrderStatus, ProductId, UserId};

use crate::models::{Order, Product, User};

use super::{
    NewOrder, NewProduct, NewUser, OrderStore, ProductStore, ProductUpdate, StoreError, UserStore,
    UserUpdate, now,
};

/// Vector-backed table with a sequential id counter.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Table<T> {
    const fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Read the table, recovering from a poisoned lock.
///
/// A poisoned lock means a handler panicked mid-write; the data is still
/// structurally valid (vector pushes are not torn), so continuing is safe
/// for a demonstration-scale store.
fn read<T>(lock: &RwLock<Table<T>>) -> RwLockReadGuard<'_, Table<T>> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<Table<T>>) -> RwLockWriteGuard<'_, Table<T>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Products
// =============================================================================

/// In-memory catalog store.
#[derive(Debug)]
pub struct MemoryProductStore {
    table: RwLock<Table<Product>>,
}

impl MemoryProductStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for MemoryProductStore {
    fn list(&self) -> Vec<Product> {
        read(&self.table).rows.clone()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        read(&self.table).rows.iter().find(|p| p.id == id).cloned()
    }

    fn create(&self, input: NewProduct) -> Product {
        let mut table = write(&self.table);
        let timestamp = now();
        let product = Product {
            id: ProductId::new(table.next_id()),
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            category: input.category,
            stock: input.stock,
            featured: input.featured,
            created_at: timestamp,
            updated_at: timestamp,
        };
        table.rows.push(product.clone());
        product
    }

    fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, StoreError> {
        let mut table = write(&self.table);
        let product = table
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(image) = update.image {
            product.image = image;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(stock) = update.stock {
            product.stock = stock;
        }
        if let Some(featured) = update.featured {
            product.featured = featured;
        }
        product.updated_at = now();

        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut table = write(&self.table);
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        if table.rows.len() == before {
            return Err(StoreError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}

// =============================================================================
// Users
// =============================================================================

/// In-memory credential store.
#[derive(Debug)]
pub struct MemoryUserStore {
    table: RwLock<Table<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryUserStore {
    fn list(&self) -> Vec<User> {
        read(&self.table).rows.clone()
    }

    fn get(&self, id: UserId) -> Option<User> {
        read(&self.table).rows.iter().find(|u| u.id == id).cloned()
    }

    fn get_by_email(&self, email: &Email) -> Option<User> {
        read(&self.table)
            .rows
            .iter()
            .find(|u| u.email == *email)
            .cloned()
    }

    fn create(&self, input: NewUser) -> Result<User, StoreError> {
        let mut table = write(&self.table);
        if table.rows.iter().any(|u| u.email == input.email) {
            return Err(StoreError::Conflict("email already exists".to_owned()));
        }
        let timestamp = now();
        let user = User {
            id: UserId::new(table.next_id()),
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            role: input.role,
            phone: input.phone,
            address: input.address,
            created_at: timestamp,
            updated_at: timestamp,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    fn update(&self, id: UserId, update: UserUpdate) -> Result<User, StoreError> {
        let mut table = write(&self.table);
        if let Some(email) = &update.email
            && table.rows.iter().any(|u| u.email == *email && u.id != id)
        {
            return Err(StoreError::Conflict("email already exists".to_owned()));
        }
        let user = table
            .rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("user {id}")))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(phone) = update.phone {
            user.phone = Some(phone);
        }
        if let Some(address) = update.address {
            user.address = Some(address);
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = now();

        Ok(user.clone())
    }

    fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut table = write(&self.table);
        let before = table.rows.len();
        table.rows.retain(|u| u.id != id);
        if table.rows.len() == before {
            return Err(StoreError::NotFound(format!("user {id}")));
        }
        Ok(())
    }
}

// =============================================================================
// Orders
// =============================================================================

/// In-memory order store.
#[derive(Debug)]
pub struct MemoryOrderStore {
    table: RwLock<Table<Order>>,
}

impl MemoryOrderStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for MemoryOrderStore {
    fn list(&self) -> Vec<Order> {
        let table = read(&self.table);
        let mut orders = table.rows.clone();
        orders.reverse();
        orders
    }

    fn list_for_user(&self, user_id: UserId) -> Vec<Order> {
        let table = read(&self.table);
        let mut orders: Vec<Order> = table
            .rows
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.reverse();
        orders
    }

    fn get(&self, id: OrderId) -> Option<Order> {
        read(&self.table).rows.iter().find(|o| o.id == id).cloned()
    }

    fn create(&self, input: NewOrder) -> Order {
        let mut table = write(&self.table);
        let order = Order {
            id: OrderId::new(table.next_id()),
            user_id: input.user_id,
            items: input.items,
            total: input.total,
            status: input.status,
            created_at: now(),
            customer_info: input.customer_info,
            payment_method: input.payment_method,
        };
        table.rows.push(order.clone());
        order
    }

    fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, StoreError> {
        let mut table = write(&self.table);
        let order = table
            .rows
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("order {id}")))?;
        order.status = status;
        Ok(order.clone())
    }
}
