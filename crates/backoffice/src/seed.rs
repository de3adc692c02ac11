//! Demo catalog seeding.
//!
//! The store starts empty on every boot. When seeding is enabled the server
//! loads a small demo catalog first: three categories, three shop items,
//! two customers, and two orders.

use rust_decimal::Decimal;

use crate::models::{
    CreateCategoryInput, CreateCustomerInput, CreateOrderInput, CreateShopItemInput,
    OrderItemInput,
};
use crate::services::ServiceError;
use crate::state::AppState;

/// Load the demo catalog into the store.
///
/// Everything goes through the regular services, so the records obey the
/// same rules as API input and land with deterministic ids on an empty
/// store: categories 1-3, shop items 1-3, customers 1-2, orders 1-2.
///
/// # Errors
///
/// Returns `ServiceError` if a record fails validation, which only happens
/// when the store already holds conflicting data.
pub fn load_demo_data(state: &AppState) -> Result<(), ServiceError> {
    let electronics = state.categories().create(CreateCategoryInput {
        title: Some("Electronics".to_owned()),
        description: Some("Electronic devices and gadgets".to_owned()),
    })?;
    let clothing = state.categories().create(CreateCategoryInput {
        title: Some("Clothing".to_owned()),
        description: Some("Fashion and apparel".to_owned()),
    })?;
    let books = state.categories().create(CreateCategoryInput {
        title: Some("Books".to_owned()),
        description: Some("Books and literature".to_owned()),
    })?;

    let laptop = state.shop_items().create(CreateShopItemInput {
        title: Some("Gaming Laptop".to_owned()),
        description: Some("High-performance laptop for gaming".to_owned()),
        price: Some(Decimal::new(129_999, 2)),
        category_ids: Some(vec![electronics.id]),
    })?;
    let tshirt = state.shop_items().create(CreateShopItemInput {
        title: Some("Cotton T-Shirt".to_owned()),
        description: Some("Comfortable cotton t-shirt".to_owned()),
        price: Some(Decimal::new(2999, 2)),
        category_ids: Some(vec![clothing.id]),
    })?;
    let novel = state.shop_items().create(CreateShopItemInput {
        title: Some("The Great Novel".to_owned()),
        description: Some("An amazing work of fiction".to_owned()),
        price: Some(Decimal::new(1999, 2)),
        category_ids: Some(vec![books.id]),
    })?;

    let john = state.customers().create(CreateCustomerInput {
        name: Some("John".to_owned()),
        surname: Some("Doe".to_owned()),
        email: Some("john.doe@example.com".to_owned()),
    })?;
    let jane = state.customers().create(CreateCustomerInput {
        name: Some("Jane".to_owned()),
        surname: Some("Smith".to_owned()),
        email: Some("jane.smith@example.com".to_owned()),
    })?;

    state.orders().create(CreateOrderInput {
        customer_id: Some(john.id),
        items: Some(vec![
            OrderItemInput {
                shop_item_id: Some(laptop.id),
                quantity: Some(1),
            },
            OrderItemInput {
                shop_item_id: Some(tshirt.id),
                quantity: Some(2),
            },
        ]),
    })?;
    state.orders().create(CreateOrderInput {
        customer_id: Some(jane.id),
        items: Some(vec![OrderItemInput {
            shop_item_id: Some(novel.id),
            quantity: Some(1),
        }]),
    })?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
