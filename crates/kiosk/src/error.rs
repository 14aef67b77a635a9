//! CLI error types.

use kiosk_core::exhibition::{DateError, ExhibitionError};
use kiosk_core::storage::RepositoryError;
use thiserror::Error;

/// Result type alias for the kiosk shell.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ExhibitionError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("Exhibition not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
