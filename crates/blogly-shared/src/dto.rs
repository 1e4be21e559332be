//! Data Transfer Objects - the `application/x-www-form-urlencoded` bodies posted by the forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field name of the post form's multi-select. Browsers repeat it once per checked tag.
pub const TAGS_FIELD: &str = "tags[]";

/// Errors decoding a form that serde cannot express directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("invalid tag id `{0}`")]
    InvalidTagId(String),
}

/// Create/edit user form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(rename = "first-name")]
    pub first_name: String,
    #[serde(rename = "last-name")]
    pub last_name: String,
    #[serde(rename = "image-url")]
    pub image_url: String,
}

/// Create/rename tag form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagForm {
    pub name: String,
}

/// Create/edit post form.
///
/// Decoded from raw key/value pairs because `tags[]` repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl PostForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, FormError> {
        let mut title = None;
        let mut content = None;
        let mut tag_ids = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "title" => title = Some(value),
                "content" => content = Some(value),
                TAGS_FIELD => {
                    let id = value
                        .trim()
                        .parse()
                        .map_err(|_| FormError::InvalidTagId(value.clone()))?;
                    tag_ids.push(id);
                }
                _ => {}
            }
        }

        Ok(Self {
            title: title.ok_or(FormError::MissingField("title"))?,
            content: content.ok_or(FormError::MissingField("content"))?,
            tag_ids,
        })
    }
}
