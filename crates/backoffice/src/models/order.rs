//! Order domain models.

use serde::{Deserialize, Serialize};
use shopdesk_core::{CustomerId, OrderId, OrderItemId, ShopItemId};

use crate::store::Record;

use super::{Customer, ShopItem};

/// A line item within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Order item ID, unique across all orders.
    pub id: OrderItemId,
    /// The purchased item, embedded as a snapshot taken when the order was
    /// written.
    pub shop_item: ShopItem,
    /// Number of units, strictly positive.
    pub quantity: i64,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The ordering customer, embedded as a snapshot.
    pub customer: Customer,
    /// Line items, never empty.
    pub items: Vec<OrderItem>,
}

impl Record for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

/// One requested line item in an order create or update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub shop_item_id: Option<ShopItemId>,
    pub quantity: Option<i64>,
}

/// Input for creating an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub customer_id: Option<CustomerId>,
    pub items: Option<Vec<OrderItemInput>>,
}

/// Input for updating an order. Omitted fields keep their prior values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderInput {
    pub customer_id: Option<CustomerId>,
    pub items: Option<Vec<OrderItemInput>>,
}

// ============================================================================
// Tests
// ============================================================================
