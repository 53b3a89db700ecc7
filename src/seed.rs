//! Sample catalogue used to populate an empty database.

use crate::domain::category::{CategoryListQuery, NewCategory};
use crate::domain::product::NewProduct;
use crate::domain::product_tag::NewProductTag;
use crate::domain::tag::{NewTag, TagListQuery};
use crate::repository::{
    CategoryReader, CategoryWriter, ProductReader, ProductWriter, RepositoryResult, TagReader,
    TagWriter,
};

const CATEGORIES: [&str; 5] = ["Shirts", "Shorts", "Music", "Hats", "Shoes"];

/// `(name, price in cents, stock, index into CATEGORIES)`
const PRODUCTS: [(&str, i32, i32, usize); 5] = [
    ("Plain T-Shirt", 1499, 14, 0),
    ("Running Sneakers", 9000, 25, 4),
    ("Branded Baseball Hat", 2299, 12, 3),
    ("Top 40 Music Compilation Vinyl Record", 1299, 50, 2),
    ("Cargo Shorts", 2999, 22, 1),
];

const TAGS: [&str; 8] = [
    "rock music",
    "pop music",
    "blue",
    "red",
    "green",
    "white",
    "gold",
    "pop culture",
];

/// `(index into PRODUCTS, index into TAGS)`
const PRODUCT_TAGS: [(usize, usize); 12] = [
    (0, 5),
    (0, 6),
    (0, 7),
    (1, 5),
    (2, 0),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 0),
    (3, 1),
    (3, 7),
    (4, 2),
];

/// Counts of the records written by [`seed_catalog`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub tags: usize,
    pub product_tags: usize,
}

/// Insert the sample catalogue into an empty database.
///
/// Returns `None` and writes nothing when any category, tag or product exists.
pub fn seed_catalog<R>(repo: &R) -> RepositoryResult<Option<SeedSummary>>
where
    R: CategoryReader
        + CategoryWriter
        + TagReader
        + TagWriter
        + ProductReader
        + ProductWriter
        + ?Sized,
{
    if !repo.list_categories(CategoryListQuery::new())?.is_empty()
        || !repo.list_tags(TagListQuery::new())?.is_empty()
        || !repo.list_products()?.is_empty()
    {
        log::info!("Catalogue is not empty, skipping seed");
        return Ok(None);
    }

    let mut summary = SeedSummary::default();

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        category_ids.push(repo.create_category(&NewCategory::new(name))?.id);
        summary.categories += 1;
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, price_cents, stock, category) in PRODUCTS {
        let new_product = NewProduct::new(name, price_cents)
            .with_stock(stock)
            .with_category_id(category_ids[category]);
        product_ids.push(repo.create_product(&new_product)?.id);
        summary.products += 1;
    }

    let mut tag_ids = Vec::with_capacity(TAGS.len());
    for name in TAGS {
        tag_ids.push(repo.create_tag(&NewTag::new(name))?.id);
        summary.tags += 1;
    }

    for (product, tag) in PRODUCT_TAGS {
        repo.tag_product(NewProductTag::new(product_ids[product], tag_ids[tag]))?;
        summary.product_tags += 1;
    }

    log::info!("Seeded catalogue: {summary:?}");

    Ok(Some(summary))
}
