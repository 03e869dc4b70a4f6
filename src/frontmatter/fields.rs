//! Serde helpers shared by the frontmatter records.
//!
//! Records derive `Deserialize`. These helpers cover what the derive does
//! not: lax booleans, `null` meaning "use the default", and turning a serde
//! failure into a [`ValidationError`] that names the field.

use crate::errors::{ValidationError, ValidationResult};
use serde::de::{self, DeserializeOwned, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// Deserializes `T` from one raw mapping, reporting the first bad field.
pub fn decode<T: DeserializeOwned>(raw: &Map<String, Value>) -> ValidationResult<T> {
    let value = Value::Object(raw.clone());
    let decoded: Result<T, _> = serde_path_to_error::deserialize(&value);
    decoded.map_err(ValidationError::from)
}

/// Accepts JSON booleans, 0/1 and the usual yes/no spellings.
struct LaxBool;

impl<'de> Visitor<'de> for LaxBool {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, 0/1 or yes/no")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

pub fn optional_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    deserializer.deserialize_any(LaxBool)
}

pub fn bool_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(optional_bool(deserializer)?.unwrap_or(true))
}

pub fn bool_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(optional_bool(deserializer)?.unwrap_or(false))
}

pub fn default_true() -> bool {
    true
}

pub fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn list_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationErrorKind;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default = "default_true", deserialize_with = "bool_or_true")]
        published: bool,
        #[serde(default, deserialize_with = "optional_bool")]
        sitemap: Option<bool>,
        #[serde(default, deserialize_with = "string_or_empty")]
        title: String,
        #[serde(default, deserialize_with = "list_or_empty")]
        tags: Vec<String>,
    }

    fn flags(value: Value) -> ValidationResult<Flags> {
        match value {
            Value::Object(map) => decode(&map),
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn absent_and_null_take_defaults() {
        let f = flags(json!({ "sitemap": null, "title": null, "tags": null })).unwrap();
        assert!(f.published);
        assert_eq!(f.sitemap, None);
        assert_eq!(f.title, "");
        assert!(f.tags.is_empty());
    }

    #[test]
    fn booleans_coerce_common_spellings() {
        assert!(!flags(json!({ "published": "no" })).unwrap().published);
        assert!(!flags(json!({ "published": 0 })).unwrap().published);
        assert_eq!(flags(json!({ "sitemap": "Yes" })).unwrap().sitemap, Some(true));

        let err = flags(json!({ "published": "maybe" })).unwrap_err();
        assert_eq!(err.field, "published");
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn strings_are_strict() {
        let err = flags(json!({ "title": 2024 })).unwrap_err();
        assert_eq!(err.field, "title");
        assert!(matches!(err.kind, ValidationErrorKind::Invalid { .. }));
    }

    #[test]
    fn list_reports_offending_index() {
        let err = flags(json!({ "tags": ["django", 3] })).unwrap_err();
        assert_eq!(err.field, "tags[1]");
    }
}
