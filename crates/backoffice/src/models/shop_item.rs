//! Shop item domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopdesk_core::{CategoryId, ShopItemId};

use crate::store::Record;

use super::ShopItemCategory;

/// An item offered by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    /// Unique shop item ID.
    pub id: ShopItemId,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Unit price, strictly positive.
    pub price: Decimal,
    /// Categories the item belongs to, embedded as snapshots taken when the
    /// item was written. Later category edits do not show up here.
    pub categories: Vec<ShopItemCategory>,
}

impl Record for ShopItem {
    type Id = ShopItemId;

    fn id(&self) -> ShopItemId {
        self.id
    }
}

/// Input for creating a shop item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopItemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_ids: Option<Vec<CategoryId>>,
}

/// Input for updating a shop item. Omitted fields keep their prior values,
/// including the category list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShopItemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_ids: Option<Vec<CategoryId>>,
}
