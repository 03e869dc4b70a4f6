//! Frontmatter records and their validation.
//!
//! Every record is built in two steps: `validate` type-checks the raw
//! mapping and applies defaults, then `derive` fills computed fields.
//! `derive` is pure and idempotent, so re-validating an exported record
//! gives back the same record.

pub mod fields;
pub mod organizer;
pub mod page;
pub mod post;
pub mod presenter;
pub mod session;
pub mod social;

use crate::errors::ValidationResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub use fields::decode;
pub use organizer::Organizer;
pub use page::Page;
pub use post::Post;
pub use presenter::Presenter;
pub use session::Schedule;
pub use social::{Social, migrate_mastodon_handle};

/// Fields shared by every content record, plus whatever undeclared keys
/// the author added. `title` lives on each record because its default
/// differs between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontmatterBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(
        default = "fields::default_true",
        deserialize_with = "fields::bool_or_true"
    )]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_from: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::optional_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub sitemap: Option<bool>,
    /// Unvalidated passthrough fields, merged back in on export.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A content record validated from frontmatter.
pub trait Frontmatter: Sized + Serialize + DeserializeOwned {
    const KIND: ContentKind;

    /// Layout used when the author leaves `layout` out or null.
    const DEFAULT_LAYOUT: Option<&'static str> = None;

    fn base(&self) -> &FrontmatterBase;

    fn base_mut(&mut self) -> &mut FrontmatterBase;

    /// Type checks and defaults only; no derived fields.
    fn validate(raw: &Map<String, Value>) -> ValidationResult<Self> {
        // Errors inside a flattened struct lose their field path, so the
        // shared fields are checked on their own first.
        decode::<FrontmatterBase>(raw)?;
        let mut record: Self = decode(raw)?;
        let base = record.base_mut();
        if base.layout.is_none() {
            base.layout = Self::DEFAULT_LAYOUT.map(str::to_string);
        }
        Ok(record)
    }

    /// Fills derived fields. Must be idempotent.
    fn derive(self) -> Self {
        self
    }

    fn from_mapping(raw: &Map<String, Value>) -> ValidationResult<Self> {
        let record = Self::validate(raw)?.derive();
        tracing::trace!(kind = %Self::KIND, "validated frontmatter");
        Ok(record)
    }

    fn to_mapping(&self) -> serde_json::Result<Map<String, Value>> {
        to_mapping(self)
    }

    fn extra(&self, key: &str) -> Option<&Value> {
        self.base().extra.get(key)
    }
}

pub(crate) fn to_mapping<T: Serialize>(value: &T) -> serde_json::Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(serde::ser::Error::custom("record did not serialize to a mapping")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Page,
    Post,
    Presenter,
    Organizer,
    Schedule,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Page,
        ContentKind::Post,
        ContentKind::Presenter,
        ContentKind::Organizer,
        ContentKind::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Page => "page",
            ContentKind::Post => "post",
            ContentKind::Presenter => "presenter",
            ContentKind::Organizer => "organizer",
            ContentKind::Schedule => "schedule",
        }
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| {
                format!(
                    "unknown content kind '{s}' (expected page|post|presenter|organizer|schedule)"
                )
            })
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any validated content record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentRecord {
    Page(Page),
    Post(Post),
    Presenter(Presenter),
    Organizer(Organizer),
    Schedule(Schedule),
}

impl ContentRecord {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Page(_) => ContentKind::Page,
            ContentRecord::Post(_) => ContentKind::Post,
            ContentRecord::Presenter(_) => ContentKind::Presenter,
            ContentRecord::Organizer(_) => ContentKind::Organizer,
            ContentRecord::Schedule(_) => ContentKind::Schedule,
        }
    }

    pub fn base(&self) -> &FrontmatterBase {
        match self {
            ContentRecord::Page(r) => r.base(),
            ContentRecord::Post(r) => r.base(),
            ContentRecord::Presenter(r) => r.base(),
            ContentRecord::Organizer(r) => r.base(),
            ContentRecord::Schedule(r) => r.base(),
        }
    }

    pub fn to_mapping(&self) -> serde_json::Result<Map<String, Value>> {
        to_mapping(self)
    }
}

/// Validates one content file's mapping as the given kind.
pub fn validate_content(
    kind: ContentKind,
    raw: &Map<String, Value>,
) -> ValidationResult<ContentRecord> {
    Ok(match kind {
        ContentKind::Page => ContentRecord::Page(Page::from_mapping(raw)?),
        ContentKind::Post => ContentRecord::Post(Post::from_mapping(raw)?),
        ContentKind::Presenter => ContentRecord::Presenter(Presenter::from_mapping(raw)?),
        ContentKind::Organizer => ContentRecord::Organizer(Organizer::from_mapping(raw)?),
        ContentKind::Schedule => ContentRecord::Schedule(Schedule::from_mapping(raw)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn base_applies_defaults() {
        let base: FrontmatterBase = decode(&mapping(json!({}))).unwrap();
        assert!(base.layout.is_none());
        assert!(base.published);
        assert!(base.permalink.is_none());
        assert!(base.extra.is_empty());
    }

    #[test]
    fn base_keeps_undeclared_keys() {
        let raw = mapping(json!({ "foo": "bar", "sitemap": "no" }));
        let base: FrontmatterBase = decode(&raw).unwrap();
        assert_eq!(base.sitemap, Some(false));
        assert_eq!(base.extra.get("foo"), Some(&json!("bar")));
        assert!(!base.extra.contains_key("sitemap"));
    }

    #[test]
    fn shared_field_errors_name_the_field() {
        let raw = mapping(json!({ "name": "Ada", "redirect_from": ["/a/", 1] }));
        let err = Presenter::from_mapping(&raw).unwrap_err();
        assert_eq!(err.field, "redirect_from[1]");
    }

    #[test]
    fn default_layout_fills_absent_and_null() {
        let raw = mapping(json!({ "date": "2024-06-01 09:30:00 -0400", "layout": null }));
        let post = Post::from_mapping(&raw).unwrap();
        assert_eq!(post.base.layout.as_deref(), Some("post"));

        let raw = mapping(json!({ "date": "2024-06-01 09:30:00 -0400", "layout": "wide" }));
        assert_eq!(Post::from_mapping(&raw).unwrap().base.layout.as_deref(), Some("wide"));
    }

    #[test]
    fn content_kind_parses_case_insensitively() {
        assert_eq!("Presenter".parse::<ContentKind>(), Ok(ContentKind::Presenter));
        assert!("talk".parse::<ContentKind>().is_err());
    }

    #[test]
    fn validate_content_dispatches_by_kind() {
        let raw = mapping(json!({ "name": "Ada Lovelace" }));
        let record = validate_content(ContentKind::Presenter, &raw).unwrap();
        assert_eq!(record.kind(), ContentKind::Presenter);
        assert_eq!(record.base().permalink.as_deref(), Some("/presenters/ada-lovelace/"));

        assert!(validate_content(ContentKind::Post, &raw).is_err());
    }
}
