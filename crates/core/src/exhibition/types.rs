use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::{format_date_range, parse_timeframe, Language};
use super::error::DateError;
use super::state::{classify, ExhibitionState};
use crate::serde::{deserialize_optional_date, deserialize_optional_string, deserialize_optional_time};

/// A person or act supporting an exhibition (artist, DJ, curator, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Free-form role such as "DJ" or "Kuratorin".
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Icon identifier used by the site ("music", "user", ...).
    pub icon: String,
}

impl Contributor {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A scheduled event within an exhibition run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEntry {
    pub title: String,
    /// Localized display date, e.g. "14. Dezember 2024".
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub start_time: Option<NaiveTime>,
    /// Absent for open-ended events.
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub end_time: Option<NaiveTime>,
    /// May contain line breaks; each line is a paragraph.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ProgramEntry {
    /// Creates a program entry on the given display date.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: Some(date.into()),
            start_time: None,
            end_time: None,
            description: None,
        }
    }

    /// Creates a program entry without a date.
    pub fn undated(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: None,
            start_time: None,
            end_time: None,
            description: None,
        }
    }

    /// Sets the start time.
    pub fn starting_at(mut self, start: NaiveTime) -> Self {
        self.start_time = Some(start);
        self
    }

    /// Sets the end time.
    pub fn ending_at(mut self, end: NaiveTime) -> Self {
        self.end_time = Some(end);
        self
    }

    /// Sets start and end time from a legacy timeframe such as "17:00 - 19:00".
    pub fn with_timeframe(mut self, timeframe: &str) -> Result<Self, DateError> {
        let (start, end) = parse_timeframe(timeframe)?;
        self.start_time = Some(start);
        self.end_time = end;
        Ok(self)
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the display date if it is present and not blank.
    pub fn display_date(&self) -> Option<&str> {
        self.date
            .as_deref()
            .map(str::trim)
            .filter(|date| !date.is_empty())
    }

    /// Renders the time span, e.g. "18:00 - 20:00", "18:00" or "".
    pub fn time_label(&self) -> String {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
            }
            (Some(start), None) => start.format("%H:%M").to_string(),
            (None, Some(end)) => format!("- {}", end.format("%H:%M")),
            (None, None) => String::new(),
        }
    }

    /// Splits the description into paragraphs, one per line.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description
            .as_deref()
            .map(|text| text.lines().collect())
            .unwrap_or_default()
    }
}

/// Program entries for one calendar day, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramByDate {
    /// Display form of the day, as it appeared in the input.
    pub date: String,
    /// Canonical day; `None` only for the bucket of undated entries.
    pub day: Option<NaiveDate>,
    pub events: Vec<ProgramEntry>,
}

impl ProgramByDate {
    /// Returns the number of events on this day.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// An exhibition record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    /// Opening day.
    pub start_date: NaiveDate,
    /// Last day; `None` for single-day exhibitions.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    #[serde(default)]
    pub program: Vec<ProgramEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exhibition {
    /// Creates a new single-day exhibition opening on `start_date`.
    pub fn new(title: impl Into<String>, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subtitle: None,
            description: String::new(),
            artist: None,
            cover_image: None,
            gallery_images: Vec::new(),
            start_date,
            end_date: None,
            contributors: Vec::new(),
            program: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Sets the last day of the run.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_cover_image(mut self, path: impl Into<String>) -> Self {
        self.cover_image = Some(path.into());
        self
    }

    pub fn with_gallery_images(mut self, paths: Vec<String>) -> Self {
        self.gallery_images = paths;
        self
    }

    pub fn with_contributor(mut self, contributor: Contributor) -> Self {
        self.contributors.push(contributor);
        self
    }

    pub fn with_program(mut self, program: Vec<ProgramEntry>) -> Self {
        self.program = program;
        self
    }

    /// Sets the last-modified timestamp.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Last day of the run; the start date for single-day exhibitions.
    pub fn effective_end(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// Derives the state of this exhibition on `today`.
    pub fn state(&self, today: NaiveDate) -> ExhibitionState {
        classify(self.start_date, self.end_date, today)
    }

    /// Formats the run for display, e.g. "1. Dezember 2024 - 3. Dezember 2024".
    pub fn date_label(&self, language: Language) -> String {
        format_date_range(self.start_date, self.end_date, language)
    }

    /// Cover image followed by the gallery images, skipping blanks.
    pub fn all_images(&self) -> Vec<&str> {
        self.cover_image
            .iter()
            .chain(self.gallery_images.iter())
            .map(String::as_str)
            .filter(|path| !path.trim().is_empty())
            .collect()
    }

    /// Names of contributors listed as DJs.
    pub fn djs(&self) -> Vec<&str> {
        self.contributors
            .iter()
            .filter(|c| c.kind.eq_ignore_ascii_case("dj"))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Contributors shown with the music icon.
    pub fn music_contributors(&self) -> Vec<&Contributor> {
        self.contributors
            .iter()
            .filter(|c| c.icon == "music")
            .collect()
    }
}
