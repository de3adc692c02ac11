//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BackofficeConfig;
use crate::services::{CategoryService, CustomerService, OrderService, ShopItemService};
use crate::store::SharedStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration and the entity
/// services, all backed by one shared store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BackofficeConfig,
    customers: CustomerService,
    categories: CategoryService,
    shop_items: ShopItemService,
    orders: OrderService,
}

impl AppState {
    /// Create application state over a fresh empty store.
    #[must_use]
    pub fn new(config: BackofficeConfig) -> Self {
        let store = SharedStore::new();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                customers: CustomerService::new(store.clone()),
                categories: CategoryService::new(store.clone()),
                shop_items: ShopItemService::new(store.clone()),
                orders: OrderService::new(store),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &BackofficeConfig {
        &self.inner.config
    }

    /// Get a reference to the customer service.
    #[must_use]
    pub fn customers(&self) -> &CustomerService {
        &self.inner.customers
    }

    /// Get a reference to the category service.
    #[must_use]
    pub fn categories(&self) -> &CategoryService {
        &self.inner.categories
    }

    /// Get a reference to the shop item service.
    #[must_use]
    pub fn shop_items(&self) -> &ShopItemService {
        &self.inner.shop_items
    }

    /// Get a reference to the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}
