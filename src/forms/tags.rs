use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::{NAME_MAX_LEN, NameIssue, clean_name};
use crate::domain::tag::{NewTag, UpdateTag};

/// Result type returned by the tag payload helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// The request body did not contain `tag_name`.
    #[error("tag_name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("tag_name cannot be empty")]
    EmptyName,
    #[error("tag_name must be at most {max} characters", max = NAME_MAX_LEN)]
    NameTooLong,
}

impl From<NameIssue> for TagFormError {
    fn from(value: NameIssue) -> Self {
        match value {
            NameIssue::Empty => Self::EmptyName,
            NameIssue::TooLong => Self::NameTooLong,
        }
    }
}

/// JSON body accepted by `POST /api/tags`.
#[derive(Debug, Default, Deserialize)]
pub struct AddTagForm {
    /// Name entered by the client.
    pub tag_name: Option<String>,
}

impl AddTagForm {
    /// Sanitizes and validates the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        let name = self.tag_name.ok_or(TagFormError::MissingName)?;

        Ok(NewTag::new(clean_name(&name)?))
    }
}

/// JSON body accepted by `PUT /api/tags/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct EditTagForm {
    /// Updated name; omitted keeps the stored name.
    pub tag_name: Option<String>,
}

impl EditTagForm {
    /// Sanitizes and validates the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self, updated_at: NaiveDateTime) -> TagFormResult<UpdateTag> {
        let tag_name = self.tag_name.as_deref().map(clean_name).transpose()?;

        Ok(UpdateTag::new(tag_name, updated_at))
    }
}
