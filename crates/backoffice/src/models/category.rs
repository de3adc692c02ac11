//! Shop item category domain models.

use serde::{Deserialize, Serialize};
use shopdesk_core::CategoryId;

use crate::store::Record;

/// A category that shop items can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItemCategory {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display title, unique across categories (case-insensitive).
    pub title: String,
    /// Free-text description.
    pub description: String,
}

impl Record for ShopItemCategory {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}

/// Input for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Input for updating a category. Omitted fields keep their prior values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryInput {
    pub title: Option<String>,
    pub description: Option<String>,
}
