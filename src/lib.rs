pub mod calendar;
pub mod category;
pub mod errors;
pub mod frontmatter;
#[cfg(feature = "cli")]
pub mod logging;
pub mod manual;
pub mod persistence;
pub mod schedule_table;
pub mod slug;
pub mod timestamp;

pub use calendar::{CalendarError, ConferenceCalendar, ConferenceDay, Room};
pub use category::ScheduleCategory;
pub use errors::{ValidationError, ValidationErrorKind, ValidationResult};
pub use frontmatter::{
    ContentKind, ContentRecord, Frontmatter, FrontmatterBase, Organizer, Page, Post, Presenter,
    Schedule, Social, validate_content,
};
pub use manual::ManualScheduleEntry;
pub use persistence::{
    PersistenceError, PersistenceResult, load_calendar_from_json, load_entries_from_json,
    load_mapping_from_json, save_entries_to_csv, save_entries_to_json,
};
pub use schedule_table::{
    RoomConflict, TableError, build_manual_schedule, entries_for_day, manual_schedule,
    room_conflicts, validate_entries,
};
