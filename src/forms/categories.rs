use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::{NAME_MAX_LEN, NameIssue, clean_name};
use crate::domain::category::{NewCategory, UpdateCategory};

/// Result type returned by the category payload helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// The request body did not contain `category_name`.
    #[error("category_name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("category_name cannot be empty")]
    EmptyName,
    /// The sanitized name exceeds the length limit.
    #[error("category_name must be at most {max} characters", max = NAME_MAX_LEN)]
    NameTooLong,
}

impl From<NameIssue> for CategoryFormError {
    fn from(value: NameIssue) -> Self {
        match value {
            NameIssue::Empty => Self::EmptyName,
            NameIssue::TooLong => Self::NameTooLong,
        }
    }
}

/// JSON body accepted by `POST /api/categories`.
#[derive(Debug, Default, Deserialize)]
pub struct AddCategoryForm {
    pub category_name: Option<String>,
}

impl AddCategoryForm {
    /// Sanitizes and validates the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        let name = self.category_name.ok_or(CategoryFormError::MissingName)?;

        Ok(NewCategory::new(clean_name(&name)?))
    }
}

/// JSON body accepted by `PUT /api/categories/{id}`.
///
/// Every field is optional; omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct EditCategoryForm {
    pub category_name: Option<String>,
}

impl EditCategoryForm {
    /// Sanitizes and validates the payload into a domain `UpdateCategory`.
    pub fn into_update_category(
        self,
        updated_at: NaiveDateTime,
    ) -> CategoryFormResult<UpdateCategory> {
        let category_name = self
            .category_name
            .as_deref()
            .map(clean_name)
            .transpose()?;

        Ok(UpdateCategory::new(category_name, updated_at))
    }
}
