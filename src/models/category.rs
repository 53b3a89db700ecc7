use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub category_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub category_name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory<'a> {
    pub category_name: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl Category {
    /// Convert the row into a domain category carrying the given products.
    pub fn with_products(self, products: Vec<DomainProduct>) -> DomainCategory {
        DomainCategory {
            id: self.id,
            category_name: self.category_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            products,
        }
    }
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        value.with_products(Vec::new())
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            category_name: value.category_name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCategory> for UpdateCategory<'a> {
    fn from(value: &'a DomainUpdateCategory) -> Self {
        Self {
            category_name: value.category_name.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
