use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryListQuery, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, LIKE_ESCAPE, RepositoryError,
    RepositoryResult, like_pattern,
};

impl CategoryReader for DieselRepository {
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let mut items_query = categories::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            items_query = items_query.filter(
                categories::category_name
                    .like(like_pattern(term))
                    .escape(LIKE_ESCAPE),
            );
        }

        let db_categories = items_query
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        if db_categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = db_categories.iter().map(|category| category.id).collect();
        let mut products = load_products_for_categories(&mut conn, &category_ids)?;

        Ok(db_categories
            .into_iter()
            .map(|category| {
                let items = products.remove(&category.id).unwrap_or_default();
                category.with_products(items)
            })
            .collect())
    }

    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<DomainCategory>> {
        let mut conn = self.conn()?;
        find_category(&mut conn, category_id)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        let mut products = load_products_for_categories(&mut conn, &[updated.id])?;
        let items = products.remove(&updated.id).unwrap_or_default();

        Ok(updated.with_products(items))
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(categories::table.filter(categories::id.eq(category_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(deleted)
    }
}

fn find_category(
    conn: &mut SqliteConnection,
    category_id: i32,
) -> RepositoryResult<Option<DomainCategory>> {
    use crate::schema::categories;

    let category = categories::table
        .filter(categories::id.eq(category_id))
        .first::<DbCategory>(conn)
        .optional()?;

    match category {
        Some(category) => {
            let mut products = load_products_for_categories(conn, &[category.id])?;
            let items = products.remove(&category.id).unwrap_or_default();
            Ok(Some(category.with_products(items)))
        }
        None => Ok(None),
    }
}

fn load_products_for_categories(
    conn: &mut SqliteConnection,
    category_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::products;

    let keys: Vec<Option<i32>> = category_ids.iter().copied().map(Some).collect();

    let rows = products::table
        .filter(products::category_id.eq_any(keys))
        .order(products::id.asc())
        .select(DbProduct::as_select())
        .load::<DbProduct>(conn)?;

    let mut grouped: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for row in rows {
        if let Some(category_id) = row.category_id {
            grouped.entry(category_id).or_default().push(row.into());
        }
    }

    Ok(grouped)
}
