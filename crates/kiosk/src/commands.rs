//! Catalog operations behind the CLI commands.
//!
//! Each function loads what it needs from the repository, hands the data to
//! the pure functions in `kiosk_core`, and writes back when something changed.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use kiosk_core::exhibition::{
    count_by_state, featured_exhibition, filter_by_state, generate_seed_exhibitions,
    group_program_by_date, past_exhibitions, search_exhibitions, upcoming_exhibitions,
    validate_exhibition, CreateExhibitionRequest, Exhibition, ExhibitionState, ProgramByDate,
    ProgramEntry, StateCounts, UndatedPolicy, UpdateExhibitionRequest,
};
use kiosk_core::storage::ExhibitionRepository;

use crate::error::{CliError, Result};

/// Summary shown by the `dashboard` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today: NaiveDate,
    pub counts: StateCounts,
    /// The current exhibition, or the most recently updated past one.
    pub featured: Option<Exhibition>,
    /// The upcoming exhibition opening soonest.
    pub next_upcoming: Option<Exhibition>,
}

/// An exhibition together with its day-by-day program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramView {
    pub exhibition: Exhibition,
    pub days: Vec<ProgramByDate>,
}

/// Lists exhibitions, optionally restricted to one state and a search term.
///
/// Without a state filter the repository order (most recently updated
/// first) is kept. Upcoming exhibitions are listed soonest first and past
/// exhibitions newest first.
pub async fn list_exhibitions<R>(
    repo: &R,
    today: NaiveDate,
    state: Option<ExhibitionState>,
    search: Option<&str>,
) -> Result<Vec<Exhibition>>
where
    R: ExhibitionRepository + ?Sized,
{
    let all = repo.list_exhibitions().await?;

    let selected = match state {
        None => all.iter().collect(),
        Some(ExhibitionState::Upcoming) => upcoming_exhibitions(&all, today),
        Some(ExhibitionState::Past) => past_exhibitions(&all, today),
        Some(state) => filter_by_state(&all, state, today),
    };

    let found = search_exhibitions(selected, search.unwrap_or_default());
    tracing::debug!(
        total = all.len(),
        matched = found.len(),
        state = ?state,
        "Listed exhibitions"
    );

    Ok(found.into_iter().cloned().collect())
}

/// Fetches one exhibition or fails with `NotFound`.
pub async fn get_exhibition<R>(repo: &R, id: Uuid) -> Result<Exhibition>
where
    R: ExhibitionRepository + ?Sized,
{
    repo.get_exhibition(id)
        .await?
        .ok_or(CliError::NotFound(id))
}

/// Validates and stores a new exhibition.
pub async fn create_exhibition<R>(repo: &R, request: CreateExhibitionRequest) -> Result<Exhibition>
where
    R: ExhibitionRepository + ?Sized,
{
    let exhibition = request.into_exhibition();
    validate_exhibition(&exhibition)?;
    repo.create_exhibition(&exhibition).await?;

    tracing::info!(id = %exhibition.id, title = %exhibition.title, "Created exhibition");
    Ok(exhibition)
}

/// Applies a partial update, re-validates and stores the exhibition.
pub async fn update_exhibition<R>(
    repo: &R,
    id: Uuid,
    request: UpdateExhibitionRequest,
) -> Result<Exhibition>
where
    R: ExhibitionRepository + ?Sized,
{
    if request.is_empty() {
        return Err(CliError::InvalidInput("nothing to update".to_string()));
    }

    let mut exhibition = get_exhibition(repo, id).await?;
    request.apply_to(&mut exhibition, Utc::now());
    validate_exhibition(&exhibition)?;
    repo.update_exhibition(&exhibition).await?;

    tracing::info!(id = %exhibition.id, "Updated exhibition");
    Ok(exhibition)
}

/// Deletes an exhibition.
pub async fn delete_exhibition<R>(repo: &R, id: Uuid) -> Result<()>
where
    R: ExhibitionRepository + ?Sized,
{
    repo.delete_exhibition(id).await?;
    tracing::info!(%id, "Deleted exhibition");
    Ok(())
}

/// Builds the day-by-day program of an exhibition.
pub async fn show_program<R>(repo: &R, id: Uuid, undated: UndatedPolicy) -> Result<ProgramView>
where
    R: ExhibitionRepository + ?Sized,
{
    let exhibition = get_exhibition(repo, id).await?;
    let days = group_program_by_date(&exhibition.program, undated)?;

    let dropped = match undated {
        UndatedPolicy::Drop => exhibition
            .program
            .iter()
            .filter(|entry| entry.display_date().is_none())
            .count(),
        UndatedPolicy::Collect => 0,
    };
    if dropped > 0 {
        tracing::warn!(%id, dropped, "Program entries without a date were left out");
    }

    Ok(ProgramView { exhibition, days })
}

/// Appends a program entry to an exhibition after validating it.
pub async fn add_program_entry<R>(repo: &R, id: Uuid, entry: ProgramEntry) -> Result<Exhibition>
where
    R: ExhibitionRepository + ?Sized,
{
    let mut exhibition = get_exhibition(repo, id).await?;
    exhibition.program.push(entry);
    exhibition.updated_at = Utc::now();
    validate_exhibition(&exhibition)?;
    repo.update_exhibition(&exhibition).await?;

    tracing::info!(%id, entries = exhibition.program.len(), "Added program entry");
    Ok(exhibition)
}

/// Computes the admin dashboard for `today`.
pub async fn dashboard<R>(repo: &R, today: NaiveDate) -> Result<Dashboard>
where
    R: ExhibitionRepository + ?Sized,
{
    let all = repo.list_exhibitions().await?;

    Ok(Dashboard {
        today,
        counts: count_by_state(&all, today),
        featured: featured_exhibition(&all, today).cloned(),
        next_upcoming: upcoming_exhibitions(&all, today).first().map(|e| (*e).clone()),
    })
}

/// Stores the demo catalog. Every run generates fresh IDs.
pub async fn seed<R>(repo: &R, today: NaiveDate) -> Result<Vec<Exhibition>>
where
    R: ExhibitionRepository + ?Sized,
{
    let exhibitions = generate_seed_exhibitions(today);
    for exhibition in &exhibitions {
        validate_exhibition(exhibition)?;
        repo.create_exhibition(exhibition).await?;
    }

    tracing::info!(count = exhibitions.len(), "Seeded exhibition catalog");
    Ok(exhibitions)
}
