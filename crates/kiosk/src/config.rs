use std::{env, path::PathBuf, str::FromStr};

use chrono::{Local, NaiveDate};
use kiosk_core::exhibition::{Language, UndatedPolicy};

use crate::error::{CliError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the JSON catalog file (default: "kiosk.json")
    pub data_file: PathBuf,
    /// Handling of program entries without a date (default: drop)
    pub undated_policy: UndatedPolicy,
    /// Fixed evaluation date; `None` means the local calendar day
    pub today: Option<NaiveDate>,
    /// Display language for dates and labels (default: de)
    pub language: Language,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `KIOSK_DATA_FILE` - Catalog file path (default: "kiosk.json")
    /// - `KIOSK_UNDATED_PROGRAM` - `drop` or `collect` (default: drop)
    /// - `KIOSK_TODAY` - Evaluation date as YYYY-MM-DD (default: local date)
    /// - `KIOSK_LANGUAGE` - `de` or `en` (default: de)
    ///
    /// A variable that is set but cannot be parsed is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = var("KIOSK_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(value) = var("KIOSK_UNDATED_PROGRAM") {
            config.undated_policy = parse_var("KIOSK_UNDATED_PROGRAM", &value)?;
        }
        if let Some(value) = var("KIOSK_TODAY") {
            config.today = Some(parse_var("KIOSK_TODAY", &value)?);
        }
        if let Some(value) = var("KIOSK_LANGUAGE") {
            config.language = parse_var("KIOSK_LANGUAGE", &value)?;
        }

        Ok(config)
    }

    /// The date exhibitions are classified against.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| CliError::InvalidConfig {
        key,
        value: value.to_string(),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("kiosk.json"),
            undated_policy: UndatedPolicy::default(),
            today: None,
            language: Language::default(),
        }
    }
}
