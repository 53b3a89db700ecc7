use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a product category together with its products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub category_name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
    /// Products that reference this category.
    pub products: Vec<Product>,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub category_name: String,
}

impl NewCategory {
    /// Build a new category payload with a trimmed name.
    pub fn new(category_name: impl Into<String>) -> Self {
        let category_name = category_name.into().trim().to_string();
        Self { category_name }
    }
}

/// Patch data applied when updating an existing category.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub category_name: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied values.
    pub fn new(category_name: Option<String>, updated_at: NaiveDateTime) -> Self {
        Self {
            category_name,
            updated_at,
        }
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional substring search applied to category names, case-insensitive
    /// for ASCII letters only. `%`, `_` and `\` match literally.
    pub search: Option<String>,
}

impl CategoryListQuery {
    /// Construct a query that targets every category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter results by a search term applied to the category name.
    pub fn search(mut self, value: impl Into<String>) -> Self {
        self.search = Some(value.into());
        self
    }
}
