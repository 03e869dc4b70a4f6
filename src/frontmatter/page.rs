use super::{ContentKind, Frontmatter, FrontmatterBase};
use serde::{Deserialize, Serialize};

/// A standalone site page. The `hero_*` and `testimonial_*` fields only
/// matter on the homepage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(flatten)]
    pub base: FrontmatterBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial_img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial_img_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Frontmatter for Page {
    const KIND: ContentKind = ContentKind::Page;

    fn base(&self) -> &FrontmatterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrontmatterBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationResult;
    use serde_json::{Value, json};

    fn page(value: Value) -> ValidationResult<Page> {
        match value {
            Value::Object(map) => Page::from_mapping(&map),
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn empty_page_is_valid() {
        let p = page(json!({})).unwrap();
        assert!(p.base.layout.is_none());
        assert!(p.title.is_none());
        assert!(p.base.published);
    }

    #[test]
    fn undeclared_fields_pass_through() {
        let p = page(json!({ "title": "Venue", "foo": "bar" })).unwrap();
        assert_eq!(p.extra("foo"), Some(&json!("bar")));
        assert_eq!(p.title.as_deref(), Some("Venue"));
    }

    #[test]
    fn declared_fields_are_still_type_checked() {
        let err = page(json!({ "heading": ["a"] })).unwrap_err();
        assert_eq!(err.field, "heading");
    }
}
