//! Domain models for the back office.
//!
//! Entities embed their related records as snapshots (orders carry full
//! customer and item copies) rather than referencing them by id, so reads
//! never need a join and later edits leave history untouched.

pub mod category;
pub mod customer;
pub mod order;
pub mod shop_item;

pub use category::{CreateCategoryInput, ShopItemCategory, UpdateCategoryInput};
pub use customer::{CreateCustomerInput, Customer, UpdateCustomerInput};
pub use order::{CreateOrderInput, Order, OrderItem, OrderItemInput, UpdateOrderInput};
pub use shop_item::{CreateShopItemInput, ShopItem, UpdateShopItemInput};
