use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::parse_localized_date;
use super::error::ExhibitionError;
use super::state::ExhibitionState;
use super::types::Exhibition;

/// Number of exhibitions per state, as shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub current: usize,
    pub upcoming: usize,
    pub past: usize,
}

impl StateCounts {
    /// Returns the count for a single state.
    pub fn get(&self, state: ExhibitionState) -> usize {
        match state {
            ExhibitionState::Current => self.current,
            ExhibitionState::Upcoming => self.upcoming,
            ExhibitionState::Past => self.past,
        }
    }

    /// Returns the total number of exhibitions counted.
    pub fn total(&self) -> usize {
        self.current + self.upcoming + self.past
    }
}

/// Filters exhibitions by their state on `today`.
pub fn filter_by_state(
    exhibitions: &[Exhibition],
    state: ExhibitionState,
    today: NaiveDate,
) -> Vec<&Exhibition> {
    exhibitions
        .iter()
        .filter(|exhibition| exhibition.state(today) == state)
        .collect()
}

/// Exhibitions running on `today`, in catalog order.
pub fn current_exhibitions(exhibitions: &[Exhibition], today: NaiveDate) -> Vec<&Exhibition> {
    filter_by_state(exhibitions, ExhibitionState::Current, today)
}

/// Exhibitions that have not opened yet, soonest first.
pub fn upcoming_exhibitions(exhibitions: &[Exhibition], today: NaiveDate) -> Vec<&Exhibition> {
    let mut upcoming = filter_by_state(exhibitions, ExhibitionState::Upcoming, today);
    upcoming.sort_by_key(|exhibition| exhibition.start_date);
    upcoming
}

/// Exhibitions that have closed, most recent opening first.
pub fn past_exhibitions(exhibitions: &[Exhibition], today: NaiveDate) -> Vec<&Exhibition> {
    let mut past = filter_by_state(exhibitions, ExhibitionState::Past, today);
    past.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    past
}

/// Picks the exhibition for the home page: the first current one, or else
/// the most recently updated past one. Upcoming exhibitions never qualify.
pub fn featured_exhibition(exhibitions: &[Exhibition], today: NaiveDate) -> Option<&Exhibition> {
    exhibitions
        .iter()
        .find(|exhibition| exhibition.state(today) == ExhibitionState::Current)
        .or_else(|| {
            filter_by_state(exhibitions, ExhibitionState::Past, today)
                .into_iter()
                .max_by_key(|exhibition| exhibition.updated_at)
        })
}

/// Case-insensitive search over title, artist and description.
/// An empty or blank term matches everything.
pub fn search_exhibitions<'a, I>(exhibitions: I, term: &str) -> Vec<&'a Exhibition>
where
    I: IntoIterator<Item = &'a Exhibition>,
{
    let needle = term.trim().to_lowercase();

    exhibitions
        .into_iter()
        .filter(|exhibition| {
            needle.is_empty()
                || exhibition.title.to_lowercase().contains(&needle)
                || exhibition
                    .artist
                    .as_deref()
                    .is_some_and(|artist| artist.to_lowercase().contains(&needle))
                || exhibition.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Counts exhibitions per state on `today`.
pub fn count_by_state(exhibitions: &[Exhibition], today: NaiveDate) -> StateCounts {
    exhibitions
        .iter()
        .fold(StateCounts::default(), |mut counts, exhibition| {
            match exhibition.state(today) {
                ExhibitionState::Current => counts.current += 1,
                ExhibitionState::Upcoming => counts.upcoming += 1,
                ExhibitionState::Past => counts.past += 1,
            }
            counts
        })
}

/// Validates an exhibition before it is stored.
///
/// This is where inconsistent runs and unparseable program dates are caught,
/// so the classifier and the program grouper only ever see clean data.
pub fn validate_exhibition(exhibition: &Exhibition) -> Result<(), ExhibitionError> {
    if exhibition.title.trim().is_empty() {
        return Err(ExhibitionError::EmptyTitle);
    }
    if exhibition.title.chars().count() > 200 {
        return Err(ExhibitionError::TitleTooLong);
    }

    if let Some(end) = exhibition.end_date {
        if end < exhibition.start_date {
            return Err(ExhibitionError::InconsistentDateRange {
                start: exhibition.start_date,
                end,
            });
        }
    }

    for (index, entry) in exhibition.program.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(ExhibitionError::EmptyProgramTitle { index });
        }
        if let Some(date) = entry.display_date() {
            parse_localized_date(date)
                .map_err(|source| ExhibitionError::InvalidProgramDate { index, source })?;
        }
    }

    Ok(())
}
