use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucket used to group calendar entries for display.
///
/// Shared by `Schedule.category`, the legacy `Schedule.group` alias and
/// `ManualScheduleEntry.group`. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleCategory {
    Break,
    Lunch,
    Rooms,
    SocialEvent,
    Sprints,
    Talks,
    Tutorials,
}

impl ScheduleCategory {
    pub const ALL: [ScheduleCategory; 7] = [
        ScheduleCategory::Break,
        ScheduleCategory::Lunch,
        ScheduleCategory::Rooms,
        ScheduleCategory::SocialEvent,
        ScheduleCategory::Sprints,
        ScheduleCategory::Talks,
        ScheduleCategory::Tutorials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleCategory::Break => "break",
            ScheduleCategory::Lunch => "lunch",
            ScheduleCategory::Rooms => "rooms",
            ScheduleCategory::SocialEvent => "social-event",
            ScheduleCategory::Sprints => "sprints",
            ScheduleCategory::Talks => "talks",
            ScheduleCategory::Tutorials => "tutorials",
        }
    }
}

impl FromStr for ScheduleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown schedule category '{s}'"))
    }
}

impl fmt::Display for ScheduleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
