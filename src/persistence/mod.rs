use crate::calendar::CalendarError;
use crate::errors::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub mod file;

pub use file::{
    load_calendar_from_json, load_entries_from_json, load_mapping_from_json, save_entries_to_csv,
    save_entries_to_json,
};
