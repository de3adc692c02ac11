//! Business logic services.
//!
//! Each service owns validation and reference resolution for one entity type
//! and talks to the [`SharedStore`](crate::store::SharedStore). Operations
//! take the store lock once and run their whole check-then-write sequence
//! under it, so partially applied writes are never observable.

pub mod categories;
pub mod customers;
pub mod orders;
pub mod shop_items;

pub use categories::CategoryService;
pub use customers::CustomerService;
pub use orders::OrderService;
pub use shop_items::ShopItemService;

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by entity service operations.
///
/// The `NotFound` and `Invalid` messages are part of the API contract and
/// reach clients verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The input fails a validation rule or references a missing record.
    #[error("{0}")]
    Invalid(String),

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Treat `None` and empty strings alike when checking required fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
