//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::payment::SimulatedGateway;
use crate::services::token::TokenIssuer;
use crate::store::{
    MemoryOrderStore, MemoryProductStore, MemoryUserStore, OrderStore, ProductStore, UserStore,
};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the three in-memory stores, the
/// token issuer, and the payment gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    products: MemoryProductStore,
    users: MemoryUserStore,
    orders: MemoryOrderStore,
    tokens: TokenIssuer,
    gateway: SimulatedGateway,
}

impl AppState {
    /// Create a new application state with empty stores.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products: MemoryProductStore::new(),
                users: MemoryUserStore::new(),
                orders: MemoryOrderStore::new(),
                tokens,
                gateway: SimulatedGateway,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get the catalog store.
    #[must_use]
    pub fn products(&self) -> &dyn ProductStore {
        &self.inner.products
    }

    /// Get the credential store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        &self.inner.users
    }

    /// Get the order store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        &self.inner.orders
    }

    /// Get the token issuer.
    #[must_use]
    pub fn tokens(&self) -> &TokenIssuer {
        &self.inner.tokens
    }

    /// Get the payment gateway.
    #[must_use]
    pub fn gateway(&self) -> &SimulatedGateway {
        &self.inner.gateway
    }
}
