//! In-memory entity store.
//!
//! All state lives in a single [`EntityStore`] behind one `RwLock`, handed
//! around as a [`SharedStore`]. Nothing is persisted; a restart starts from
//! an empty store.

mod table;

pub use table::{Record, Table};

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::{Customer, Order, ShopItem, ShopItemCategory};

/// Errors raised by the shared store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store lock was poisoned by a panicking holder.
    #[error("store lock poisoned")]
    Poisoned,
}

/// The entity tables backing the API.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub customers: Table<Customer>,
    pub categories: Table<ShopItemCategory>,
    pub shop_items: Table<ShopItem>,
    pub orders: Table<Order>,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared handle to the entity store.
///
/// Cheaply cloneable; all clones see the same tables. Callers take the lock
/// once and run their whole check-then-write sequence under it, so each
/// operation observes and produces a consistent store.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<EntityStore>>,
}

impl SharedStore {
    /// Create a handle to a fresh empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the store for reading.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous holder panicked.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, EntityStore>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    /// Acquire the store for writing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a previous holder panicked.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, EntityStore>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

// ============================================================================
// Tests
// ============================================================================
