use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when parsing localized dates and clock times.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format: {0:?} (expected \"<day>. <month> <year>\")")]
    InvalidDateFormat(String),
    #[error("Unknown month name: {0:?}")]
    UnknownMonth(String),
    #[error("Invalid time: {0:?} (expected HH:MM)")]
    InvalidTime(String),
}

/// Errors that can occur when validating an exhibition record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExhibitionError {
    #[error("Exhibition title cannot be empty")]
    EmptyTitle,
    #[error("Exhibition title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End date {end} is before start date {start}")]
    InconsistentDateRange { start: NaiveDate, end: NaiveDate },
    #[error("Program entry {index} has an empty title")]
    EmptyProgramTitle { index: usize },
    #[error("Program entry {index} has an invalid date: {source}")]
    InvalidProgramDate {
        index: usize,
        #[source]
        source: DateError,
    },
    #[error(transparent)]
    Date(#[from] DateError),
}
