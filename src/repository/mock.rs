use mockall::mock;

use super::{CategoryReader, CategoryWriter, RepositoryResult, TagReader, TagWriter};
use crate::domain::{
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    tag::{NewTag, Tag, TagListQuery, UpdateTag},
};

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn list_tags(&self, query: TagListQuery) -> RepositoryResult<Vec<Tag>>;
        fn get_tag_by_id(&self, tag_id: i32) -> RepositoryResult<Option<Tag>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize>;
    }
}
