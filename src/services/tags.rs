use chrono::Utc;
use serde::Deserialize;

use crate::domain::tag::{Tag, TagListQuery};
use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the tag list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TagQuery {
    /// Optional substring search (ASCII case-insensitive) applied to tag names.
    pub search: Option<String>,
}

/// Lists every tag with the products linked to it.
pub fn load_tags<R>(repo: &R, query: TagQuery) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    let TagQuery { search } = query;

    let mut list_query = TagListQuery::new();
    if let Some(term) = search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        list_query = list_query.search(term);
    }

    repo.list_tags(list_query).map_err(ServiceError::from)
}

pub fn load_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<Tag>
where
    R: TagReader + ?Sized,
{
    match repo.get_tag_by_id(tag_id)? {
        Some(tag) => Ok(tag),
        None => Err(ServiceError::NotFound),
    }
}

/// Creates a new tag.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Updates an existing tag.
pub fn modify_tag<R>(repo: &R, tag_id: i32, form: EditTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let update = form
        .into_update_tag(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_tag(tag_id, &update).map_err(ServiceError::from)
}

/// Deletes a tag together with its product links.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<usize>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}
