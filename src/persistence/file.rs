use super::{PersistenceError, PersistenceResult};
use crate::calendar::ConferenceCalendar;
use crate::manual::ManualScheduleEntry;
use crate::schedule_table::validate_entries;
use crate::timestamp;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn save_entries_to_json<P: AsRef<Path>>(
    entries: &[ManualScheduleEntry],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, entries)?;
    tracing::info!(
        path = %path.as_ref().display(),
        entries = entries.len(),
        "saved schedule as json"
    );
    Ok(())
}

/// Loads entries previously written by [`save_entries_to_json`], running
/// each one back through validation.
pub fn load_entries_from_json<P: AsRef<Path>>(
    path: P,
) -> PersistenceResult<Vec<ManualScheduleEntry>> {
    let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let Value::Array(items) = value else {
        return Err(PersistenceError::InvalidData(
            "expected a JSON array of schedule entries".into(),
        ));
    };

    let mut entries = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let Value::Object(raw) = item else {
            return Err(PersistenceError::InvalidData(format!(
                "schedule entry #{idx} is not a mapping"
            )));
        };
        let entry = ManualScheduleEntry::from_mapping(raw)
            .map_err(|err| err.nested_in(&format!("[{idx}]")))?;
        entries.push(entry);
    }

    validate_entries(&entries).map_err(|err| PersistenceError::InvalidData(err.to_string()))?;
    Ok(entries)
}

#[derive(Serialize)]
struct EntryCsvRecord {
    datetime: String,
    end_datetime: String,
    group: String,
    permalink: String,
    room: String,
    title: String,
    track: String,
    #[serde(rename = "abstract")]
    abstract_: String,
}

impl From<&ManualScheduleEntry> for EntryCsvRecord {
    fn from(entry: &ManualScheduleEntry) -> Self {
        Self {
            datetime: timestamp::format(&entry.datetime),
            end_datetime: timestamp::format(&entry.end_datetime),
            group: entry.group.as_str().to_string(),
            permalink: entry.permalink.clone().unwrap_or_default(),
            room: entry.room.clone(),
            title: entry.title.clone(),
            track: entry.track.clone(),
            abstract_: entry.abstract_.clone(),
        }
    }
}

pub fn save_entries_to_csv<P: AsRef<Path>>(
    entries: &[ManualScheduleEntry],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);
    for entry in entries {
        writer.serialize(EntryCsvRecord::from(entry))?;
    }
    writer.flush()?;
    tracing::info!(
        path = %path.as_ref().display(),
        entries = entries.len(),
        "saved schedule as csv"
    );
    Ok(())
}

/// Reads one raw frontmatter mapping. The top-level value must be an object.
pub fn load_mapping_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Map<String, Value>> {
    let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PersistenceError::InvalidData(
            "frontmatter must be a JSON object".into(),
        )),
    }
}

pub fn load_calendar_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ConferenceCalendar> {
    let calendar: ConferenceCalendar = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    calendar.validate()?;
    Ok(calendar)
}
