use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a reusable tag that can be attached to multiple products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag.
    pub tag_name: String,
    /// Timestamp for when the tag record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the tag record.
    pub updated_at: NaiveDateTime,
    /// Products linked to the tag through `product_tags`.
    pub products: Vec<Product>,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Human-readable name of the tag.
    pub tag_name: String,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into().trim().to_string();
        Self { tag_name }
    }
}

/// Patch data applied when updating an existing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTag {
    /// Updated human-readable name of the tag; `None` keeps the stored name.
    pub tag_name: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateTag {
    /// Build a tag update payload with the supplied values.
    pub fn new(tag_name: Option<String>, updated_at: NaiveDateTime) -> Self {
        Self {
            tag_name,
            updated_at,
        }
    }
}

/// Query definition used to list tags.
#[derive(Debug, Clone, Default)]
pub struct TagListQuery {
    /// Optional substring search, case-insensitive for ASCII letters only.
    /// `%`, `_` and `\` match literally.
    pub search: Option<String>,
}

impl TagListQuery {
    /// Construct a query that targets every tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the tag name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
