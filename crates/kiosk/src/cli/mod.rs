//! CLI command definitions.

pub mod exhibitions;
pub mod program;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use kiosk_core::exhibition::{Language, UndatedPolicy};

use crate::config::Config;

/// Admin CLI for the Alter Kiosk exhibition catalog.
#[derive(Debug, Parser)]
#[command(name = "kiosk")]
#[command(version, about = "Admin CLI for the Alter Kiosk exhibition catalog", long_about = None)]
pub struct Cli {
    /// Catalog file.
    #[arg(long, global = true, env = "KIOSK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Evaluate exhibition states on this date instead of today (YYYY-MM-DD).
    #[arg(long, global = true, env = "KIOSK_TODAY")]
    pub today: Option<NaiveDate>,

    /// What to do with program entries that have no date.
    #[arg(long, global = true, value_enum, env = "KIOSK_UNDATED_PROGRAM")]
    pub undated: Option<UndatedArg>,

    /// Display language for dates and labels.
    #[arg(long, global = true, value_enum, env = "KIOSK_LANGUAGE")]
    pub language: Option<LanguageArg>,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies command-line values on top of the environment configuration.
    pub fn merge_into(&self, mut config: Config) -> Config {
        if let Some(path) = &self.data_file {
            config.data_file = path.clone();
        }
        if let Some(today) = self.today {
            config.today = Some(today);
        }
        if let Some(undated) = self.undated {
            config.undated_policy = undated.into();
        }
        if let Some(language) = self.language {
            config.language = language.into();
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI handling of undated program entries (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UndatedArg {
    /// Leave them out.
    Drop,
    /// Show them under "Unbekannt".
    Collect,
}

impl From<UndatedArg> for UndatedPolicy {
    fn from(arg: UndatedArg) -> Self {
        match arg {
            UndatedArg::Drop => UndatedPolicy::Drop,
            UndatedArg::Collect => UndatedPolicy::Collect,
        }
    }
}

/// CLI display language (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    De,
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::De => Language::De,
            LanguageArg::En => Language::En,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Exhibition management.
    Exhibitions(exhibitions::ExhibitionsCommand),
    /// Exhibition programs.
    Program(program::ProgramCommand),
    /// Counts per state and the featured exhibition.
    Dashboard,
    /// Write a demo catalog around today's date.
    Seed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_read_environment() {
        let command = Cli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .and_then(|env| env.to_str())
                .map(str::to_string)
        };

        assert_eq!(env_of("data_file").as_deref(), Some("KIOSK_DATA_FILE"));
        assert_eq!(env_of("today").as_deref(), Some("KIOSK_TODAY"));
        assert_eq!(env_of("undated").as_deref(), Some("KIOSK_UNDATED_PROGRAM"));
        assert_eq!(env_of("language").as_deref(), Some("KIOSK_LANGUAGE"));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "kiosk",
            "--data-file",
            "/tmp/catalog.json",
            "--today",
            "2024-12-03",
            "--undated",
            "collect",
            "--language",
            "en",
            "dashboard",
        ]);
        let base = Config {
            data_file: PathBuf::from("kiosk.json"),
            undated_policy: UndatedPolicy::Drop,
            today: None,
            language: Language::De,
        };

        let config = cli.merge_into(base);

        assert_eq!(config.data_file, PathBuf::from("/tmp/catalog.json"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 12, 3));
        assert_eq!(config.undated_policy, UndatedPolicy::Collect);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let cli = Cli::parse_from(["kiosk", "seed"]);
        let base = Config {
            data_file: PathBuf::from("kiosk.json"),
            undated_policy: UndatedPolicy::Collect,
            today: None,
            language: Language::En,
        };

        assert_eq!(cli.merge_into(base.clone()), base);
        assert!(matches!(cli.command, Commands::Seed));
    }
}
