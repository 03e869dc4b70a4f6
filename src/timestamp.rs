//! Timestamps as they appear in frontmatter.
//!
//! Authors write `YYYY-MM-DD HH:MM:SS +TTTT`; exports use the same form,
//! with a fractional second only when the value has one. RFC 3339 and the
//! colon offset variant are accepted on input as well. A timestamp without
//! an offset is rejected.

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serializer};

/// `%.f` prints nothing for whole seconds and is optional when parsing.
pub const FRONTMATTER_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

const ACCEPTED_FORMATS: [&str; 2] = [FRONTMATTER_FORMAT, "%Y-%m-%d %H:%M:%S%.f%:z"];

const EXPECTED: &str = "a timestamp like 2024-09-23 09:00:00 -0400";

pub fn parse(input: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok())
}

pub fn format(value: &DateTime<FixedOffset>) -> String {
    value.format(FRONTMATTER_FORMAT).to_string()
}

pub fn serialize<S: Serializer>(
    value: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<FixedOffset>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&raw), &EXPECTED))
}

/// Optional timestamps; `null` reads as absent.
pub mod option {
    use chrono::{DateTime, FixedOffset};
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                super::parse(&raw).ok_or_else(|| {
                    de::Error::invalid_value(Unexpected::Str(&raw), &super::EXPECTED)
                })
            })
            .transpose()
    }
}
