//! Shop item category service.

use shopdesk_core::CategoryId;

use crate::models::{CreateCategoryInput, ShopItemCategory, UpdateCategoryInput};
use crate::store::SharedStore;

use super::{ServiceError, non_empty};

/// CRUD operations over categories.
///
/// Titles are unique case-insensitively: `Books` and `books` collide.
#[derive(Clone)]
pub struct CategoryService {
    store: SharedStore,
}

impl CategoryService {
    /// Create a service backed by the given store.
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the store lock is poisoned.
    pub fn list_all(&self) -> Result<Vec<ShopItemCategory>, ServiceError> {
        Ok(self.store.read()?.categories.list())
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn get_by_id(&self, id: CategoryId) -> Result<ShopItemCategory, ServiceError> {
        self.store
            .read()?
            .categories
            .get(id)
            .ok_or_else(|| ServiceError::NotFound("Category not found".to_owned()))
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if a required field is missing or
    /// empty, or the title is already taken.
    pub fn create(&self, input: CreateCategoryInput) -> Result<ShopItemCategory, ServiceError> {
        let (Some(title), Some(description)) = (
            non_empty(input.title),
            non_empty(input.description),
        ) else {
            return Err(ServiceError::Invalid(
                "Title and description are required".to_owned(),
            ));
        };

        let mut store = self.store.write()?;
        if title_taken(store.categories.iter(), &title, None) {
            return Err(ServiceError::Invalid(
                "Category with this title already exists".to_owned(),
            ));
        }

        Ok(store.categories.create(|id| ShopItemCategory {
            id,
            title,
            description,
        }))
    }

    /// Update a category. Omitted fields keep their prior values.
    ///
    /// Shop items keep the category snapshot they embedded when they were
    /// written; this change is not propagated to them.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Invalid` if no field is supplied or a supplied
    /// title is taken, and `ServiceError::NotFound` if the id is absent.
    pub fn update(
        &self,
        id: CategoryId,
        input: UpdateCategoryInput,
    ) -> Result<ShopItemCategory, ServiceError> {
        if input.title.is_none() && input.description.is_none() {
            return Err(ServiceError::Invalid(
                "At least one field must be provided for update".to_owned(),
            ));
        }

        let mut store = self.store.write()?;
        if let Some(title) = input.title.as_deref()
            && title_taken(store.categories.iter(), title, Some(id))
        {
            return Err(ServiceError::Invalid(
                "Category with this title already exists".to_owned(),
            ));
        }

        store
            .categories
            .update(id, |category| {
                if let Some(title) = input.title {
                    category.title = title;
                }
                if let Some(description) = input.description {
                    category.description = description;
                }
            })
            .ok_or_else(|| ServiceError::NotFound("Category not found".to_owned()))
    }

    /// Delete a category.
    ///
    /// Shop items keep their embedded category snapshots.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the id is absent.
    pub fn delete(&self, id: CategoryId) -> Result<(), ServiceError> {
        if self.store.write()?.categories.delete(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Category not found".to_owned()))
        }
    }
}

/// Case-insensitive title collision check, optionally excluding one id.
fn title_taken<'a>(
    mut categories: impl Iterator<Item = &'a ShopItemCategory>,
    title: &str,
    exclude: Option<CategoryId>,
) -> bool {
    let lowered = title.to_lowercase();
    categories.any(|c| c.title.to_lowercase() == lowered && Some(c.id) != exclude)
}

// ============================================================================
// Tests
// ============================================================================
