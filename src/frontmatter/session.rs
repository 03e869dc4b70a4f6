use super::{ContentKind, Frontmatter, FrontmatterBase, fields};
use crate::category::ScheduleCategory;
use crate::timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIFFICULTY: &str = "All";

/// A submitted session (talk, tutorial, social event) on the schedule.
///
/// `category` is authoritative; `group` is a legacy alias that always
/// mirrors it after derivation. `presenter_slugs` are soft references to
/// `Presenter::slug` and are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(flatten)]
    pub base: FrontmatterBase,
    #[serde(default, deserialize_with = "fields::bool_or_false")]
    pub accepted: bool,
    pub category: ScheduleCategory,
    /// An explicit `null` stays `None` and is exported as `null`.
    #[serde(default = "default_difficulty")]
    pub difficulty: Option<String>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_datetime: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<ScheduleCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presenter_slugs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::optional_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_video_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_url: Option<String>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_datetime: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "fields::string_or_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

fn default_difficulty() -> Option<String> {
    Some(DEFAULT_DIFFICULTY.to_string())
}

impl Frontmatter for Schedule {
    const KIND: ContentKind = ContentKind::Schedule;
    const DEFAULT_LAYOUT: Option<&'static str> = Some("session-details");

    fn derive(mut self) -> Self {
        if self.group != Some(self.category) {
            tracing::debug!(
                title = %self.title,
                group = ?self.group,
                category = %self.category,
                "forcing group to match category"
            );
            self.group = Some(self.category);
        }
        self
    }

    fn base(&self) -> &FrontmatterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrontmatterBase {
        &mut self.base
    }
}
