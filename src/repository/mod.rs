use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::product_tag::{NewProductTag, ProductTag};
use crate::domain::tag::{NewTag, Tag, TagListQuery, UpdateTag};

pub use errors::{RepositoryError, RepositoryResult};

pub mod category;
pub mod errors;
pub mod product;
pub mod tag;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Escape character used with `LIKE ... ESCAPE` in substring searches.
const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching `term` literally anywhere in a value.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Read-only operations over categories, with their products eagerly loaded.
pub trait CategoryReader {
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    /// Fails with [`RepositoryError::NotFound`] when no category has `category_id`.
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    /// Returns the number of deleted rows, or [`RepositoryError::NotFound`] when zero.
    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over tags, with their products eagerly loaded.
pub trait TagReader {
    fn list_tags(&self, query: TagListQuery) -> RepositoryResult<Vec<Tag>>;
    fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<Tag>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize>;
}

/// Product operations needed to populate categories and tags.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn tag_product(&self, link: NewProductTag) -> RepositoryResult<ProductTag>;
}

/// Read-only access to products regardless of category or tags.
pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}
