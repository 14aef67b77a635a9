//! Exhibition CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use kiosk_core::exhibition::{CreateExhibitionRequest, ExhibitionState, UpdateExhibitionRequest};

/// Exhibition management commands.
#[derive(Debug, Parser)]
pub struct ExhibitionsCommand {
    #[command(subcommand)]
    pub action: ExhibitionsAction,
}

/// CLI exhibition state filter (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StateArg {
    Current,
    Upcoming,
    Past,
}

impl From<StateArg> for ExhibitionState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Current => ExhibitionState::Current,
            StateArg::Upcoming => ExhibitionState::Upcoming,
            StateArg::Past => ExhibitionState::Past,
        }
    }
}

/// Available exhibition actions.
#[derive(Debug, Subcommand)]
pub enum ExhibitionsAction {
    /// List exhibitions.
    List {
        /// Only show exhibitions in this state.
        #[arg(long, value_enum)]
        state: Option<StateArg>,
        /// Case-insensitive search in title, artist and description.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one exhibition.
    Get {
        /// Exhibition ID.
        id: Uuid,
    },
    /// Create a new exhibition.
    Create {
        /// Exhibition title.
        #[arg(long)]
        title: String,
        /// Opening day (YYYY-MM-DD).
        #[arg(long)]
        start_date: NaiveDate,
        /// Last day (YYYY-MM-DD); omit for single-day exhibitions.
        #[arg(long)]
        end_date: Option<NaiveDate>,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Path or URL of the cover image.
        #[arg(long)]
        cover_image: Option<String>,
    },
    /// Update an existing exhibition.
    Update {
        /// Exhibition ID.
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long, conflicts_with = "single_day")]
        end_date: Option<NaiveDate>,
        /// Remove the end date.
        #[arg(long)]
        single_day: bool,
        #[arg(long)]
        subtitle: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        cover_image: Option<String>,
    },
    /// Delete an exhibition.
    Delete {
        /// Exhibition ID.
        id: Uuid,
    },
}

impl ExhibitionsAction {
    /// Builds the create request for a `Create` action.
    pub fn create_request(&self) -> Option<CreateExhibitionRequest> {
        match self {
            ExhibitionsAction::Create {
                title,
                start_date,
                end_date,
                subtitle,
                artist,
                description,
                cover_image,
            } => Some(CreateExhibitionRequest {
                title: title.clone(),
                start_date: *start_date,
                end_date: *end_date,
                subtitle: subtitle.clone(),
                artist: artist.clone(),
                description: description.clone(),
                cover_image: cover_image.clone(),
            }),
            _ => None,
        }
    }

    /// Builds the update request for an `Update` action.
    pub fn update_request(&self) -> Option<UpdateExhibitionRequest> {
        match self {
            ExhibitionsAction::Update {
                title,
                start_date,
                end_date,
                single_day,
                subtitle,
                artist,
                description,
                cover_image,
                ..
            } => Some(UpdateExhibitionRequest {
                title: title.clone(),
                start_date: *start_date,
                end_date: *end_date,
                clear_end_date: *single_day,
                subtitle: subtitle.clone(),
                artist: artist.clone(),
                description: description.clone(),
                cover_image: cover_image.clone(),
            }),
            _ => None,
        }
    }
}
