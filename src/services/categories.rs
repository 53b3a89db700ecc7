use chrono::Utc;
use serde::Deserialize;

use crate::domain::category::{Category, CategoryListQuery};
use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the category list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// Optional substring search (ASCII case-insensitive) applied to category names.
    pub search: Option<String>,
}

/// Lists every category with its products. An empty catalogue is not an error.
pub fn load_categories<R>(repo: &R, query: CategoryQuery) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    let mut list_query = CategoryListQuery::new();

    if let Some(term) = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
    {
        list_query = list_query.search(term);
    }

    repo.list_categories(list_query).map_err(ServiceError::from)
}

/// Fetches one category with its products.
pub fn load_category<R>(repo: &R, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new category from the submitted payload.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Applies the submitted fields to an existing category.
pub fn modify_category<R>(
    repo: &R,
    category_id: i32,
    form: EditCategoryForm,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let update = form
        .into_update_category(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a category and returns the number of removed rows.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<usize>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id)
        .map_err(ServiceError::from)
}
