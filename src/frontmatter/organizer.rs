use super::{ContentKind, Frontmatter, FrontmatterBase, Social, fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    #[serde(flatten)]
    pub base: FrontmatterBase,
    #[serde(default, deserialize_with = "fields::bool_or_false")]
    pub hidden: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
}

impl Frontmatter for Organizer {
    const KIND: ContentKind = ContentKind::Organizer;
    const DEFAULT_LAYOUT: Option<&'static str> = Some("base");

    fn derive(mut self) -> Self {
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
