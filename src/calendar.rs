use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    #[error("{date} {time} does not exist exactly once in {timezone}")]
    AmbiguousLocalTime {
        date: NaiveDate,
        time: NaiveTime,
        timezone: Tz,
    },
    #[error("conference days must be in ascending order: {0} is not after {1}")]
    DaysOutOfOrder(NaiveDate, NaiveDate),
}

/// Named days of the conference week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConferenceDay {
    Tutorial,
    Talk1,
    Talk2,
    Talk3,
    Sprint1,
    Sprint2,
}

impl ConferenceDay {
    pub const ALL: [ConferenceDay; 6] = [
        ConferenceDay::Tutorial,
        ConferenceDay::Talk1,
        ConferenceDay::Talk2,
        ConferenceDay::Talk3,
        ConferenceDay::Sprint1,
        ConferenceDay::Sprint2,
    ];
}

/// Named rooms the fixed schedule refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    Lunch,
    LargeTalk,
    /// The registration desk outside the large talk room.
    InFrontOfLargeTalk,
    Lactation,
    Quiet,
    Green,
    Sprint,
}

/// Dates, rooms and timezone of one conference edition.
///
/// Passed explicitly to the schedule table builder; nothing reads it from
/// global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceCalendar {
    pub tutorial_day: NaiveDate,
    pub talk_days: [NaiveDate; 3],
    pub sprint_days: [NaiveDate; 2],
    pub lunch_room: String,
    pub large_talk_room: String,
    pub lactation_room: String,
    pub quiet_room: String,
    pub green_room: String,
    pub sprint_room: String,
    pub timezone: Tz,
}

impl Default for ConferenceCalendar {
    /// The 2024 edition in Durham, NC.
    fn default() -> Self {
        Self {
            tutorial_day: ymd(2024, 9, 22),
            talk_days: [ymd(2024, 9, 23), ymd(2024, 9, 24), ymd(2024, 9, 25)],
            sprint_days: [ymd(2024, 9, 26), ymd(2024, 9, 27)],
            lunch_room: "Junior Ballroom".to_string(),
            large_talk_room: "Grand Ballroom".to_string(),
            lactation_room: "Room 103".to_string(),
            quiet_room: "Room 104".to_string(),
            green_room: "Room 105".to_string(),
            sprint_room: "Caktus Group".to_string(),
            timezone: chrono_tz::America::New_York,
        }
    }
}

impl ConferenceCalendar {
    pub fn day(&self, day: ConferenceDay) -> NaiveDate {
        match day {
            ConferenceDay::Tutorial => self.tutorial_day,
            ConferenceDay::Talk1 => self.talk_days[0],
            ConferenceDay::Talk2 => self.talk_days[1],
            ConferenceDay::Talk3 => self.talk_days[2],
            ConferenceDay::Sprint1 => self.sprint_days[0],
            ConferenceDay::Sprint2 => self.sprint_days[1],
        }
    }

    pub fn room(&self, room: Room) -> String {
        match room {
            Room::Lunch => self.lunch_room.clone(),
            Room::LargeTalk => self.large_talk_room.clone(),
            Room::InFrontOfLargeTalk => format!("In front of {}", self.large_talk_room),
            Room::Lactation => self.lactation_room.clone(),
            Room::Quiet => self.quiet_room.clone(),
            Room::Green => self.green_room.clone(),
            Room::Sprint => self.sprint_room.clone(),
        }
    }

    /// Combines a conference day with a local time of day in the conference
    /// timezone.
    pub fn at(
        &self,
        day: ConferenceDay,
        hour: u32,
        minute: u32,
    ) -> Result<DateTime<FixedOffset>, CalendarError> {
        let date = self.day(day);
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(CalendarError::InvalidTime { hour, minute })?;
        self.timezone
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|dt| dt.fixed_offset())
            .ok_or(CalendarError::AmbiguousLocalTime {
                date,
                time,
                timezone: self.timezone,
            })
    }

    /// Days must run tutorial, talks, sprints, strictly ascending.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let days: Vec<NaiveDate> = ConferenceDay::ALL.iter().map(|d| self.day(*d)).collect();
        for pair in days.windows(2) {
            if pair[1] <= pair[0] {
                return Err(CalendarError::DaysOutOfOrder(pair[1], pair[0]));
            }
        }
        Ok(())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
