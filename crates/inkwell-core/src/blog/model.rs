//! Blog domain model.
//!
//! A blog record is owned by the backend: ids and authors are assigned
//! server-side and the client only ever edits title, category and content.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Fixed set of blog categories.
///
/// "All" is not a variant: an unset category (`None`) means no filter, or
/// no category on a record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Career,
    Travel,
    Finance,
    Tech,
}

/// A blog post as returned by the backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogRecord {
    /// Server-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, with = "category_field")]
    pub category: Option<Category>,
    /// Display name of the author, assigned from the session identity
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

/// Editable fields of a blog record.
///
/// This is both the editor's draft and the write payload. An unset category
/// is sent as `""` and the backend decides whether that is acceptable.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFields {
    pub title: String,
    #[serde(default, with = "category_field")]
    pub category: Option<Category>,
    pub content: String,
}

impl BlogFields {
    pub fn new(
        title: impl Into<String>,
        category: Option<Category>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            content: content.into(),
        }
    }
}

impl From<&BlogRecord> for BlogFields {
    fn from(record: &BlogRecord) -> Self {
        Self {
            title: record.title.clone(),
            category: record.category,
            content: record.content.clone(),
        }
    }
}

/// Wire encoding for an optional category: `""` (or null/missing) is unset.
pub mod category_field {
    use super::Category;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(category) => serializer.serialize_str(category.as_ref()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(parse(raw.as_deref().unwrap_or_default()))
    }

    /// Parses a category label. Blank and unknown labels are unset.
    pub fn parse(raw: &str) -> Option<Category> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return None;
        }
        match Category::from_str(trimmed) {
            Ok(category) => Some(category),
            Err(_) => {
                tracing::warn!("Ignoring unknown blog category '{}'", trimmed);
                None
            }
        }
    }
}
