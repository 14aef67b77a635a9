//! Program CLI commands.

use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use kiosk_core::exhibition::{
    parse_clock_time, parse_localized_date, DateError, ProgramEntry,
};

/// Program commands.
#[derive(Debug, Parser)]
pub struct ProgramCommand {
    #[command(subcommand)]
    pub action: ProgramAction,
}

fn clock_time(value: &str) -> Result<NaiveTime, DateError> {
    parse_clock_time(value)
}

fn program_date(value: &str) -> Result<String, DateError> {
    parse_localized_date(value).map(|_| value.trim().to_string())
}

/// Available program actions.
#[derive(Debug, Subcommand)]
pub enum ProgramAction {
    /// Show the day-by-day program of an exhibition.
    Show {
        /// Exhibition ID.
        id: Uuid,
    },
    /// Add an entry to the program of an exhibition.
    Add {
        /// Exhibition ID.
        id: Uuid,
        /// Entry title.
        #[arg(long)]
        title: String,
        /// Day of the entry, e.g. "14. Dezember 2024".
        #[arg(long, value_parser = program_date)]
        date: Option<String>,
        /// Start time (HH:MM).
        #[arg(long, value_parser = clock_time, conflicts_with = "timeframe")]
        start: Option<NaiveTime>,
        /// End time (HH:MM).
        #[arg(long, value_parser = clock_time, conflicts_with = "timeframe")]
        end: Option<NaiveTime>,
        /// Time span such as "17:00 - 19:00".
        #[arg(long)]
        timeframe: Option<String>,
        /// Description; line breaks become paragraphs.
        #[arg(long)]
        description: Option<String>,
    },
}

impl ProgramAction {
    /// Builds the program entry for an `Add` action.
    pub fn entry(&self) -> Option<Result<ProgramEntry, DateError>> {
        let ProgramAction::Add {
            title,
            date,
            start,
            end,
            timeframe,
            description,
            ..
        } = self
        else {
            return None;
        };

        let mut entry = ProgramEntry {
            title: title.clone(),
            date: date.clone(),
            start_time: *start,
            end_time: *end,
            description: description.clone(),
        };

        if let Some(timeframe) = timeframe {
            entry = match entry.with_timeframe(timeframe) {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err)),
            };
        }

        Some(Ok(entry))
    }
}
