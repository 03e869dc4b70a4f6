//! The fixed, non-session part of the conference schedule.
//!
//! Every slot is a literal time of day on a named conference day; the
//! calendar turns it into an absolute timestamp.

use crate::calendar::{CalendarError, ConferenceCalendar, ConferenceDay, Room};
use crate::category::ScheduleCategory;
use crate::manual::ManualScheduleEntry;
use chrono::{DateTime, FixedOffset, NaiveDate};
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("entry #{index} '{title}': {source}")]
    Calendar {
        index: usize,
        title: String,
        #[source]
        source: CalendarError,
    },
    #[error("entry #{index} '{title}' ends at {end} which is not after its start {start}")]
    NonPositiveDuration {
        index: usize,
        title: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
}

/// Two entries booked into the same room at overlapping times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomConflict {
    pub room: String,
    pub first: usize,
    pub second: usize,
}

struct Slot {
    day: ConferenceDay,
    start: (u32, u32),
    end: (u32, u32),
    group: ScheduleCategory,
    permalink: Option<&'static str>,
    room: Room,
    title: &'static str,
}

const fn slot(
    day: ConferenceDay,
    start: (u32, u32),
    end: (u32, u32),
    group: ScheduleCategory,
    permalink: Option<&'static str>,
    room: Room,
    title: &'static str,
) -> Slot {
    Slot {
        day,
        start,
        end,
        group,
        permalink,
        room,
        title,
    }
}

impl Slot {
    fn resolve(
        &self,
        index: usize,
        calendar: &ConferenceCalendar,
    ) -> Result<ManualScheduleEntry, TableError> {
        let at = |(hour, minute): (u32, u32)| {
            calendar
                .at(self.day, hour, minute)
                .map_err(|source| TableError::Calendar {
                    index,
                    title: self.title.to_string(),
                    source,
                })
        };
        Ok(ManualScheduleEntry::new(
            at(self.start)?,
            at(self.end)?,
            self.group,
            self.permalink,
            calendar.room(self.room),
            self.title,
        ))
    }
}

use ConferenceDay::{Sprint1, Sprint2, Talk1, Talk2, Talk3, Tutorial};
use ScheduleCategory::{Break, Lunch, Talks};

#[rustfmt::skip]
const MANUAL_SLOTS: &[Slot] = &[
    // Sunday
    slot(Tutorial, (8, 0), (9, 0), Lunch, Some("/catering-menus/#sunday-breakfast"), Room::Lunch, "Continental Breakfast"),
    slot(Tutorial, (8, 0), (18, 0), Break, None, Room::InFrontOfLargeTalk, "Registration"),
    slot(Tutorial, (12, 30), (13, 30), Lunch, Some("/catering-menus/#sunday-lunch"), Room::Lunch, "Lunch"),
    // Monday
    slot(Talk1, (7, 30), (8, 30), Lunch, Some("/catering-menus/#monday-breakfast"), Room::Lunch, "Continental Breakfast"),
    slot(Talk1, (7, 30), (17, 30), Break, None, Room::InFrontOfLargeTalk, "Registration"),
    slot(Talk1, (8, 0), (17, 30), Break, Some("/news/childcare-lactation/"), Room::Lactation, "Lactation Room"),
    slot(Talk1, (8, 0), (17, 30), Break, None, Room::Quiet, "Quiet Room"),
    slot(Talk1, (8, 0), (17, 30), Break, None, Room::Green, "Speaker Green Room"),
    slot(Talk1, (10, 10), (10, 35), Break, Some("/catering-menus/#monday-morning-break"), Room::Lunch, "Break"),
    slot(Talk1, (12, 0), (12, 40), Lunch, Some("/catering-menus/#monday-lunch"), Room::Lunch, "Early Lunch"),
    // Lunch ends when the online talk in the same slot ends.
    slot(Talk1, (12, 40), (13, 25), Lunch, Some("/catering-menus/#monday-lunch"), Room::Lunch, "Lunch"),
    // The published site links the afternoon break to the morning anchor.
    slot(Talk1, (14, 55), (15, 20), Break, Some("/catering-menus/#monday-morning-break"), Room::Lunch, "Break"),
    slot(Talk1, (19, 0), (22, 0), Break, None, Room::LargeTalk, "Board Game Night"),
    // Tuesday
    slot(Talk2, (8, 0), (9, 0), Lunch, Some("/catering-menus/#tuesday-breakfast"), Room::Lunch, "Continental Breakfast"),
    slot(Talk2, (8, 0), (17, 30), Break, None, Room::InFrontOfLargeTalk, "Registration"),
    slot(Talk2, (8, 0), (17, 30), Break, Some("/news/childcare-lactation/"), Room::Lactation, "Lactation Room"),
    slot(Talk2, (8, 0), (17, 30), Break, None, Room::Quiet, "Quiet Room"),
    slot(Talk2, (8, 0), (17, 30), Break, None, Room::Green, "Speaker Green Room"),
    slot(Talk2, (10, 10), (10, 35), Break, Some("/catering-menus/#tuesday-morning-break"), Room::Lunch, "Break"),
    slot(Talk2, (12, 0), (12, 40), Lunch, Some("/catering-menus/#tuesday-lunch"), Room::Lunch, "Early Lunch"),
    // Links Monday's menu anchor, as the published site does.
    slot(Talk2, (12, 40), (13, 25), Lunch, Some("/catering-menus/#monday-lunch"), Room::Lunch, "Lunch"),
    slot(Talk2, (14, 55), (15, 20), Break, Some("/catering-menus/#tuesday-afternoon-break"), Room::Lunch, "Break"),
    // Wednesday
    slot(Talk3, (8, 0), (9, 0), Lunch, Some("/catering-menus/#wednesday-breakfast"), Room::Lunch, "Continental Breakfast"),
    slot(Talk3, (8, 0), (17, 30), Break, None, Room::InFrontOfLargeTalk, "Registration"),
    slot(Talk3, (8, 0), (17, 30), Break, Some("/news/childcare-lactation/"), Room::Lactation, "Lactation Room"),
    slot(Talk3, (8, 0), (17, 30), Break, None, Room::Quiet, "Quiet Room"),
    slot(Talk3, (8, 0), (17, 30), Break, None, Room::Green, "Speaker Green Room"),
    slot(Talk3, (10, 10), (10, 35), Break, Some("/catering-menus/#wednesday-morning-break"), Room::Lunch, "Break"),
    slot(Talk3, (12, 0), (12, 40), Lunch, Some("/catering-menus/#wednesday-lunch"), Room::Lunch, "Early Lunch"),
    slot(Talk3, (12, 40), (13, 25), Lunch, Some("/catering-menus/#wednesday-lunch"), Room::Lunch, "Lunch"),
    slot(Talk3, (14, 55), (15, 20), Break, Some("/catering-menus/#wednesday-afternoon-break"), Room::Lunch, "Break"),
    // Thursday and Friday
    slot(Sprint1, (9, 0), (17, 0), Talks, None, Room::Sprint, "Contribution Sprints"),
    slot(Sprint2, (9, 0), (17, 0), Talks, None, Room::Sprint, "Contribution Sprints"),
];

pub const MANUAL_ENTRY_COUNT: usize = MANUAL_SLOTS.len();

static DEFAULT_SCHEDULE: Lazy<Result<Vec<ManualScheduleEntry>, TableError>> =
    Lazy::new(|| build_manual_schedule(&ConferenceCalendar::default()));

/// The fixed entries for the default calendar, built on first use.
pub fn manual_schedule() -> Result<&'static [ManualScheduleEntry], TableError> {
    DEFAULT_SCHEDULE
        .as_ref()
        .map(Vec::as_slice)
        .map_err(Clone::clone)
}

/// Resolves every fixed slot against `calendar`, in declaration order.
///
/// Fails if any slot cannot be placed in the conference timezone or does
/// not end strictly after it starts. Same-room overlaps are only logged;
/// see [`room_conflicts`].
pub fn build_manual_schedule(
    calendar: &ConferenceCalendar,
) -> Result<Vec<ManualScheduleEntry>, TableError> {
    let entries = MANUAL_SLOTS
        .iter()
        .enumerate()
        .map(|(index, slot)| slot.resolve(index, calendar))
        .collect::<Result<Vec<_>, _>>()?;

    validate_entries(&entries)?;

    for conflict in room_conflicts(&entries) {
        tracing::warn!(
            room = %conflict.room,
            first = %entries[conflict.first].title,
            second = %entries[conflict.second].title,
            "manual schedule entries overlap in the same room"
        );
    }

    tracing::info!(
        entries = entries.len(),
        timezone = %calendar.timezone,
        "built manual schedule"
    );
    Ok(entries)
}

/// Rejects any entry that does not end strictly after it starts.
pub fn validate_entries(entries: &[ManualScheduleEntry]) -> Result<(), TableError> {
    match entries
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.end_datetime <= entry.datetime)
    {
        Some((index, entry)) => Err(TableError::NonPositiveDuration {
            index,
            title: entry.title.clone(),
            start: entry.datetime,
            end: entry.end_datetime,
        }),
        None => Ok(()),
    }
}

/// Pairs of entries (by index) booked into the same room with overlapping
/// intervals. Touching intervals do not conflict.
pub fn room_conflicts(entries: &[ManualScheduleEntry]) -> Vec<RoomConflict> {
    let mut conflicts = Vec::new();
    for (i, a) in entries.iter().enumerate() {
        for (j, b) in entries.iter().enumerate().skip(i + 1) {
            if a.room == b.room && a.overlaps(b) {
                conflicts.push(RoomConflict {
                    room: a.room.clone(),
                    first: i,
                    second: j,
                });
            }
        }
    }
    conflicts
}

/// Entries starting on `date`, in the entries' own local time.
pub fn entries_for_day(
    entries: &[ManualScheduleEntry],
    date: NaiveDate,
) -> Vec<&ManualScheduleEntry> {
    entries
        .iter()
        .filter(|entry| entry.datetime.date_naive() == date)
        .collect()
}
