use crate::category::ScheduleCategory;
use crate::errors::ValidationResult;
use crate::frontmatter::fields;
use crate::timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TRACK: &str = "t0";

/// A calendar entry that is not a submitted session: meals, breaks,
/// registration, quiet rooms, sprints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualScheduleEntry {
    #[serde(with = "timestamp")]
    pub datetime: DateTime<FixedOffset>,
    #[serde(with = "timestamp")]
    pub end_datetime: DateTime<FixedOffset>,
    pub group: ScheduleCategory,
    #[serde(default)]
    pub permalink: Option<String>,
    pub room: String,
    pub title: String,
    #[serde(default = "default_track", deserialize_with = "track_or_default")]
    pub track: String,
    #[serde(
        rename = "abstract",
        default,
        deserialize_with = "fields::string_or_empty"
    )]
    pub abstract_: String,
}

fn default_track() -> String {
    DEFAULT_TRACK.to_string()
}

fn track_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_track))
}

impl ManualScheduleEntry {
    /// Builds a derived entry on the default track.
    pub fn new(
        datetime: DateTime<FixedOffset>,
        end_datetime: DateTime<FixedOffset>,
        group: ScheduleCategory,
        permalink: Option<&str>,
        room: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            datetime,
            end_datetime,
            group,
            permalink: permalink.map(str::to_string),
            room: room.into(),
            title: title.into(),
            track: DEFAULT_TRACK.to_string(),
            abstract_: String::new(),
        }
        .derive()
    }

    pub fn validate(raw: &Map<String, Value>) -> ValidationResult<Self> {
        fields::decode(raw)
    }

    /// An empty abstract falls back to the room name.
    pub fn derive(mut self) -> Self {
        if self.abstract_.is_empty() {
            self.abstract_ = self.room.clone();
        }
        self
    }

    pub fn from_mapping(raw: &Map<String, Value>) -> ValidationResult<Self> {
        Self::validate(raw).map(Self::derive)
    }

    pub fn to_mapping(&self) -> serde_json::Result<Map<String, Value>> {
        crate::frontmatter::to_mapping(self)
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_datetime - self.datetime
    }

    pub fn overlaps(&self, other: &ManualScheduleEntry) -> bool {
        self.datetime < other.end_datetime && other.datetime < self.end_datetime
    }
}
