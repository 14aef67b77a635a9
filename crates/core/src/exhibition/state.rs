use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::dates::Language;

/// Where an exhibition stands relative to today.
///
/// Never stored: it is derived from the exhibition run every time it is
/// needed, so records move from upcoming to current to past on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionState {
    Current,
    Upcoming,
    Past,
}

impl ExhibitionState {
    /// All states in display order.
    pub const ALL: [ExhibitionState; 3] = [
        ExhibitionState::Current,
        ExhibitionState::Upcoming,
        ExhibitionState::Past,
    ];

    /// Returns the badge text shown on exhibition pages.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (ExhibitionState::Current, Language::De) => "Aktuelle Ausstellung",
            (ExhibitionState::Upcoming, Language::De) => "Kommende Ausstellung",
            (ExhibitionState::Past, Language::De) => "Vergangene Ausstellung",
            (ExhibitionState::Current, Language::En) => "Current Exhibition",
            (ExhibitionState::Upcoming, Language::En) => "Upcoming Exhibition",
            (ExhibitionState::Past, Language::En) => "Past Exhibition",
        }
    }

    /// Returns the lowercase identifier used in data files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitionState::Current => "current",
            ExhibitionState::Upcoming => "upcoming",
            ExhibitionState::Past => "past",
        }
    }
}

impl fmt::Display for ExhibitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an exhibition run relative to `today`.
///
/// The run is the inclusive span of calendar days from `start` to `end`
/// (or just `start` when there is no end), so a single-day exhibition is
/// current for the whole of that day. `end < start` is a data error caught
/// by validation; such a run is `Upcoming` before `start`, `Past` from
/// `start` on, and never `Current`.
pub fn classify(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> ExhibitionState {
    let effective_end = end.unwrap_or(start);

    if today < start {
        ExhibitionState::Upcoming
    } else if today <= effective_end {
        ExhibitionState::Current
    } else {
        ExhibitionState::Past
    }
}

/// Classifies an exhibition run at an instant, using the calendar day of
/// that instant in its own time zone.
pub fn classify_at<Tz: TimeZone>(
    start: NaiveDate,
    end: Option<NaiveDate>,
    now: &DateTime<Tz>,
) -> ExhibitionState {
    classify(start, end, now.date_naive())
}
