use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag, UpdateTag as DomainUpdateTag};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub tag_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub tag_name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tags)]
pub struct UpdateTag<'a> {
    pub tag_name: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl Tag {
    /// Convert the row into a domain tag carrying the given products.
    pub fn with_products(self, products: Vec<DomainProduct>) -> DomainTag {
        DomainTag {
            id: self.id,
            tag_name: self.tag_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            products,
        }
    }
}

impl From<Tag> for DomainTag {
    fn from(value: Tag) -> Self {
        value.with_products(Vec::new())
    }
}

impl<'a> From<&'a DomainNewTag> for NewTag<'a> {
    fn from(value: &'a DomainNewTag) -> Self {
        Self {
            tag_name: value.tag_name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateTag> for UpdateTag<'a> {
    fn from(value: &'a DomainUpdateTag) -> Self {
        Self {
            tag_name: value.tag_name.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
