use super::{ContentKind, Frontmatter, FrontmatterBase, Social, fields};
use crate::slug::{presenter_permalink, slugify};
use serde::{Deserialize, Serialize};

/// A speaker. Sessions refer to presenters by `slug`, which is derived from
/// `name` when the author leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presenter {
    #[serde(flatten)]
    pub base: FrontmatterBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "fields::bool_or_false")]
    pub hidden: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_schedule_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
    #[serde(default, deserialize_with = "fields::string_or_empty")]
    pub title: String,
}

impl Presenter {
    /// The derived slug; always present once the record has been derived.
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or_default()
    }
}

impl Frontmatter for Presenter {
    const KIND: ContentKind = ContentKind::Presenter;

    fn derive(mut self) -> Self {
        let slug = match self.slug.take().filter(|s| !s.is_empty()) {
            Some(slug) => slug,
            None => {
                let slug = slugify(&self.name);
                tracing::debug!(name = %self.name, slug = %slug, "derived presenter slug");
                slug
            }
        };
        if self.base.permalink.as_deref().is_none_or(str::is_empty) {
            self.base.permalink = Some(presenter_permalink(&slug));
        }
        self.slug = Some(slug);
        self.social = self.social.map(Social::derive);
        self
    }

    fn base(&self) -> &FrontmatterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrontmatterBase {
        &mut self.base
    }
}
