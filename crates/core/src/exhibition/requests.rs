use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::Exhibition;

/// Request to create an exhibition from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExhibitionRequest {
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl CreateExhibitionRequest {
    /// Create a request for a single-day exhibition.
    pub fn new(title: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            start_date,
            end_date: None,
            subtitle: None,
            artist: None,
            description: None,
            cover_image: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Build the exhibition record. Validation is left to the caller.
    pub fn into_exhibition(self) -> Exhibition {
        let mut exhibition = Exhibition::new(self.title, self.start_date);
        exhibition.end_date = self.end_date;
        exhibition.subtitle = self.subtitle;
        exhibition.artist = self.artist;
        exhibition.description = self.description.unwrap_or_default();
        exhibition.cover_image = self.cover_image;
        exhibition
    }
}

/// Partial update of an exhibition. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExhibitionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Turns the exhibition back into a single-day run.
    #[serde(default)]
    pub clear_end_date: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl UpdateExhibitionRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Returns true if the request changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply updates to an existing exhibition and stamp `updated_at`.
    pub fn apply_to(self, exhibition: &mut Exhibition, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            exhibition.title = title;
        }
        if let Some(start_date) = self.start_date {
            exhibition.start_date = start_date;
        }
        if self.clear_end_date {
            exhibition.end_date = None;
        } else if let Some(end_date) = self.end_date {
            exhibition.end_date = Some(end_date);
        }
        if let Some(subtitle) = self.subtitle {
            exhibition.subtitle = Some(subtitle);
        }
        if let Some(artist) = self.artist {
            exhibition.artist = Some(artist);
        }
        if let Some(description) = self.description {
            exhibition.description = description;
        }
        if let Some(cover_image) = self.cover_image {
            exhibition.cover_image = Some(cover_image);
        }
        exhibition.updated_at = now;
    }
}
