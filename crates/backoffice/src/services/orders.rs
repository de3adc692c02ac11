//! Order service.

use shopdesk_core::{OrderId, OrderItemId, ShopItemId};

use crate::models::{CreateOrderInput, Order, OrderItem, OrderItemInput, UpdateOrderInput};
use crate::store::{EntityStore, SharedStore};

use super::ServiceError;

/// CRUD operations over orders.
///
/// Customer and shop item references are resolved at write time and
/// embedded as snapshots. Line item ids are unique across all orders; each
/// write continues from the highest id currently embedded anywhere. A write
/// either resolves every reference or changes nothing.
#[derive(Clone)]
pub struct OrderService {
    store: SharedStore,
}

impl OrderService {
    /// Create a service backed by the given store.
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All orders in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store lock is poisoned.
    pub fn list_all(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.store.read()?.orders.list())
    }

    /// Look up an order by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn get_by_id(&self, id: OrderId) -> Result<Order, ServiceError> {
        self.store
            .read()?
            .orders
            .get(id)
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_owned()))
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if a required field is missing, an
    /// item is incomplete, the item list is empty, a quantity is not
    /// positive, or a referenced customer or shop item does not exist.
    pub fn create(&self, input: CreateOrderInput) -> Result<Order, ServiceError> {
        let (Some(customer_id), Some(items)) = (input.customer_id, input.items) else {
            return Err(ServiceError::Invalid(
                "CustomerId and items are required".to_owned(),
            ));
        };
        let requested = check_items(&items)?;

        let mut store = self.store.write()?;
        let customer = store.customers.get(customer_id).ok_or_else(|| {
            ServiceError::Invalid(format!("Customer with id {customer_id} not found"))
        })?;
        let order_items = resolve_items(&store, &requested)?;

        Ok(store.orders.create(|id| Order {
            id,
            customer,
            items: order_items,
        }))
    }

    /// Update an order. Omitted fields keep their prior values.
    ///
    /// Supplying `items` replaces the whole line item list; the new items
    /// get fresh ids.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` for the same input problems as
    /// [`create`](Self::create), plus when no field is supplied at all, and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn update(&self, id: OrderId, input: UpdateOrderInput) -> Result<Order, ServiceError> {
        if input.customer_id.is_none() && input.items.is_none() {
            return Err(ServiceError::Invalid(
                "At least one field must be provided for update".to_owned(),
            ));
        }

        let requested = input.items.as_deref().map(check_items).transpose()?;

        let mut store = self.store.write()?;

        let customer = input
            .customer_id
            .map(|customer_id| {
                store.customers.get(customer_id).ok_or_else(|| {
                    ServiceError::Invalid(format!("Customer with id {customer_id} not found"))
                })
            })
            .transpose()?;

        let items = requested
            .as_deref()
            .map(|requested| resolve_items(&store, requested))
            .transpose()?;

        store
            .orders
            .update(id, |order| {
                if let Some(customer) = customer {
                    order.customer = customer;
                }
                if let Some(items) = items {
                    order.items = items;
                }
            })
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_owned()))
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn delete(&self, id: OrderId) -> Result<(), ServiceError> {
        if self.store.write()?.orders.delete(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Order not found".to_owned()))
        }
    }
}

/// A shape-checked line item request.
struct RequestedItem {
    shop_item_id: ShopItemId,
    quantity: i64,
}

/// Check that every requested item names a shop item and a quantity.
///
/// Zero values count as missing here; sign checks come later, during
/// resolution.
fn check_items(items: &[OrderItemInput]) -> Result<Vec<RequestedItem>, ServiceError> {
    items
        .iter()
        .map(|item| {
            let shop_item_id = item.shop_item_id.filter(|id| id.as_i32() != 0);
            let quantity = item.quantity.filter(|&q| q != 0);
            let (Some(shop_item_id), Some(quantity)) = (shop_item_id, quantity) else {
                return Err(ServiceError::Invalid(
                    "Each item must have shopItemId and quantity".to_owned(),
                ));
            };
            Ok(RequestedItem {
                shop_item_id,
                quantity,
            })
        })
        .collect()
}

/// Resolve requested items to line items, in input order.
///
/// Fails on the first problem, before anything is written. Ids continue
/// from the highest line item id embedded in any stored order.
fn resolve_items(
    store: &EntityStore,
    requested: &[RequestedItem],
) -> Result<Vec<OrderItem>, ServiceError> {
    if requested.is_empty() {
        return Err(ServiceError::Invalid(
            "Order must contain at least one item".to_owned(),
        ));
    }

    let mut next_id = store
        .orders
        .iter()
        .flat_map(|order| &order.items)
        .map(|item| item.id.as_i32())
        .max()
        .unwrap_or(0);

    let mut items = Vec::with_capacity(requested.len());
    for request in requested {
        let shop_item = store.shop_items.get(request.shop_item_id).ok_or_else(|| {
            ServiceError::Invalid(format!(
                "Shop item with id {} not found",
                request.shop_item_id
            ))
        })?;

        if request.quantity <= 0 {
            return Err(ServiceError::Invalid(
                "Item quantity must be greater than 0".to_owned(),
            ));
        }

        next_id += 1;
        items.push(OrderItem {
            id: OrderItemId::new(next_id),
            shop_item,
            quantity: request.quantity,
        });
    }

    Ok(items)
}

// ============================================================================
// Tests
// ============================================================================
