use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product listed in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price expressed in cents.
    pub price_cents: i32,
    /// Number of units in stock.
    pub stock: i32,
    /// Category the product belongs to, if any.
    pub category_id: Option<i32>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price expressed in cents.
    pub price_cents: i32,
    /// Number of units in stock.
    pub stock: i32,
    /// Category the product belongs to, if any.
    pub category_id: Option<i32>,
}

impl NewProduct {
    /// Build a product payload with the default stock level and no category.
    pub fn new(product_name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            product_name: product_name.into().trim().to_string(),
            price_cents,
            stock: DEFAULT_STOCK,
            category_id: None,
        }
    }

    /// Override the number of units in stock.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Place the product into a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Stock level assigned to products created without an explicit amount.
pub const DEFAULT_STOCK: i32 = 10;
