use super::{ContentKind, Frontmatter, FrontmatterBase, fields};
use crate::timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";

/// A news/blog post. `category` is free text, not an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub base: FrontmatterBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default = "general", deserialize_with = "category_or_general")]
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(with = "timestamp")]
    pub date: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "fields::list_or_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "fields::string_or_empty")]
    pub title: String,
}

fn general() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn category_or_general<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(general))
}

impl Frontmatter for Post {
    const KIND: ContentKind = ContentKind::Post;
    const DEFAULT_LAYOUT: Option<&'static str> = Some("post");

    fn base(&self) -> &FrontmatterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrontmatterBase {
        &mut self.base
    }
}
