use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagListQuery, UpdateTag as DomainUpdateTag,
};
use crate::models::product::Product as DbProduct;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::{
    DieselRepository, LIKE_ESCAPE, RepositoryError, RepositoryResult, TagReader, TagWriter,
    like_pattern,
};

impl TagReader for DieselRepository {
    fn list_tags(&self, query: TagListQuery) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let mut items_query = tags::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(search) = query.search.as_ref() {
            items_query = items_query.filter(
                tags::tag_name
                    .like(like_pattern(search))
                    .escape(LIKE_ESCAPE),
            );
        }

        let db_tags = items_query.order(tags::id.asc()).load::<DbTag>(&mut conn)?;

        if db_tags.is_empty() {
            return Ok(Vec::new());
        }

        let tag_ids: Vec<i32> = db_tags.iter().map(|tag| tag.id).collect();
        let mut products = load_products_for_tags(&mut conn, &tag_ids)?;

        Ok(db_tags
            .into_iter()
            .map(|tag| {
                let items = products.remove(&tag.id).unwrap_or_default();
                tag.with_products(items)
            })
            .collect())
    }

    fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let Some(tag) = tags::table
            .filter(tags::id.eq(tag_id))
            .first::<DbTag>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let mut products = load_products_for_tags(&mut conn, &[tag.id])?;
        let items = products.remove(&tag.id).unwrap_or_default();

        Ok(Some(tag.with_products(items)))
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateTag::from(updates);

        let updated = diesel::update(tags::table.filter(tags::id.eq(tag_id)))
            .set(&db_updates)
            .get_result::<DbTag>(&mut conn)?;

        let mut products = load_products_for_tags(&mut conn, &[updated.id])?;
        let items = products.remove(&updated.id).unwrap_or_default();

        Ok(updated.with_products(items))
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(tags::table.filter(tags::id.eq(tag_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(deleted)
    }
}

/// Products reachable from each tag through `product_tags`, keyed by tag id.
fn load_products_for_tags(
    conn: &mut SqliteConnection,
    tag_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::{product_tags, products};

    let rows = product_tags::table
        .inner_join(products::table)
        .filter(product_tags::tag_id.eq_any(tag_ids))
        .order((product_tags::tag_id.asc(), products::id.asc()))
        .select((product_tags::tag_id, DbProduct::as_select()))
        .load::<(i32, DbProduct)>(conn)?;

    let mut grouped: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for (tag_id, product) in rows {
        grouped.entry(tag_id).or_default().push(product.into());
    }

    Ok(grouped)
}
