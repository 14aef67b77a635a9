//! kiosk - admin CLI for the Alter Kiosk exhibition catalog.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;

pub use config::Config;
pub use error::{CliError, Result};
