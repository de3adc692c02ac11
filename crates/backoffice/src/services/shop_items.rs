//! Shop item service.

use rust_decimal::Decimal;
use shopdesk_core::{CategoryId, ShopItemId};

use crate::models::{CreateShopItemInput, ShopItem, ShopItemCategory, UpdateShopItemInput};
use crate::store::{EntityStore, SharedStore};

use super::{ServiceError, non_empty};

/// CRUD operations over shop items.
///
/// Category references are resolved at write time and embedded as
/// snapshots. A write either resolves every referenced category or changes
/// nothing.
#[derive(Clone)]
pub struct ShopItemService {
    store: SharedStore,
}

impl ShopItemService {
    /// Create a service backed by the given store.
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All shop items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store lock is poisoned.
    pub fn list_all(&self) -> Result<Vec<ShopItem>, ServiceError> {
        Ok(self.store.read()?.shop_items.list())
    }

    /// Look up a shop item by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn get_by_id(&self, id: ShopItemId) -> Result<ShopItem, ServiceError> {
        self.store
            .read()?
            .shop_items
            .get(id)
            .ok_or_else(|| ServiceError::NotFound("Shop item not found".to_owned()))
    }

    /// Create a shop item.
    ///
    /// An empty `category_ids` list is allowed; the item simply belongs to
    /// no category.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if a required field is missing, the
    /// price is not positive, or a referenced category does not exist.
    pub fn create(&self, input: CreateShopItemInput) -> Result<ShopItem, ServiceError> {
        let (Some(title), Some(description), Some(price), Some(category_ids)) = (
            non_empty(input.title),
            non_empty(input.description),
            input.price,
            input.category_ids,
        ) else {
            return Err(ServiceError::Invalid(
                "Title, description, price, and categoryIds are required".to_owned(),
            ));
        };

        check_price(price)?;

        let mut store = self.store.write()?;
        let categories = resolve_categories(&store, &category_ids)?;

        Ok(store.shop_items.create(|id| ShopItem {
            id,
            title,
            description,
            price,
            categories,
        }))
    }

    /// Update a shop item. Omitted fields keep their prior values; in
    /// particular, omitting `category_ids` keeps the existing category
    /// snapshots untouched.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if no field is supplied, a supplied
    /// price is not positive, or a referenced category does not exist, and
    /// `ServiceError::NotFound` if the id is absent.
    pub fn update(
        &self,
        id: ShopItemId,
        input: UpdateShopItemInput,
    ) -> Result<ShopItem, ServiceError> {
        if input.title.is_none()
            && input.description.is_none()
            && input.price.is_none()
            && input.category_ids.is_none()
        {
            return Err(ServiceError::Invalid(
                "At least one field must be provided for update".to_owned(),
            ));
        }

        if let Some(price) = input.price {
            check_price(price)?;
        }

        let mut store = self.store.write()?;
        let categories = match &input.category_ids {
            Some(ids) => Some(resolve_categories(&store, ids)?),
            None => None,
        };

        store
            .shop_items
            .update(id, |item| {
                if let Some(title) = input.title {
                    item.title = title;
                }
                if let Some(description) = input.description {
                    item.description = description;
                }
                if let Some(price) = input.price {
                    item.price = price;
                }
                if let Some(categories) = categories {
                    item.categories = categories;
                }
            })
            .ok_or_else(|| ServiceError::NotFound("Shop item not found".to_owned()))
    }

    /// Delete a shop item.
    ///
    /// Existing orders keep their embedded item snapshots.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn delete(&self, id: ShopItemId) -> Result<(), ServiceError> {
        if self.store.write()?.shop_items.delete(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Shop item not found".to_owned()))
        }
    }
}

fn check_price(price: Decimal) -> Result<(), ServiceError> {
    if price <= Decimal::ZERO {
        return Err(ServiceError::Invalid(
            "Price must be greater than 0".to_owned(),
        ));
    }
    Ok(())
}

/// Resolve category ids to snapshots, in input order.
///
/// Fails on the first id that does not exist, before anything is written.
fn resolve_categories(
    store: &EntityStore,
    ids: &[CategoryId],
) -> Result<Vec<ShopItemCategory>, ServiceError> {
    ids.iter()
        .map(|&id| {
            store
                .categories
                .get(id)
                .ok_or_else(|| ServiceError::Invalid(format!("Category with id {id} not found")))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
