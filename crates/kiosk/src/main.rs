//! kiosk CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiosk::cli::exhibitions::ExhibitionsAction;
use kiosk::cli::program::ProgramAction;
use kiosk::cli::{Cli, Commands, OutputFormat};
use kiosk::commands;
use kiosk::output::{format_output, pretty};
use kiosk::storage::JsonFileRepository;
use kiosk::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "kiosk=warn" } else { "kiosk=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.merge_into(Config::from_env()?);
    let today = config.today();
    let language = config.language;

    let repo = JsonFileRepository::open(&config.data_file)
        .await
        .with_context(|| format!("failed to open {}", config.data_file.display()))?;
    tracing::debug!(path = %repo.path().display(), %today, "Using catalog");

    match cli.command {
        Commands::Exhibitions(exhibitions_cmd) => {
            let action = exhibitions_cmd.action;
            match &action {
                ExhibitionsAction::List { state, search } => {
                    let exhibitions = commands::list_exhibitions(
                        &repo,
                        today,
                        state.map(Into::into),
                        search.as_deref(),
                    )
                    .await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&exhibitions, cli.format))
                        }
                        OutputFormat::Pretty => println!(
                            "{}",
                            pretty::format_exhibitions(&exhibitions, today, language)
                        ),
                    }
                }
                ExhibitionsAction::Get { id } => {
                    let exhibition = commands::get_exhibition(&repo, *id).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&exhibition, cli.format))
                        }
                        OutputFormat::Pretty => println!(
                            "{}",
                            pretty::format_exhibition(&exhibition, today, language)
                        ),
                    }
                }
                ExhibitionsAction::Create { .. } => {
                    let request = action
                        .create_request()
                        .context("create action without request")?;
                    let exhibition = commands::create_exhibition(&repo, request).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&exhibition, cli.format))
                        }
                        OutputFormat::Pretty => println!(
                            "Created:\n{}",
                            pretty::format_exhibition(&exhibition, today, language)
                        ),
                    }
                }
                ExhibitionsAction::Update { id, .. } => {
                    let request = action
                        .update_request()
                        .context("update action without request")?;
                    let exhibition = commands::update_exhibition(&repo, *id, request).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&exhibition, cli.format))
                        }
                        OutputFormat::Pretty => println!(
                            "Updated:\n{}",
                            pretty::format_exhibition(&exhibition, today, language)
                        ),
                    }
                }
                ExhibitionsAction::Delete { id } => {
                    commands::delete_exhibition(&repo, *id).await?;
                    if !cli.quiet {
                        println!("Deleted exhibition {}", id);
                    }
                }
            }
        }
        Commands::Program(program_cmd) => {
            let action = program_cmd.action;
            match &action {
                ProgramAction::Show { id } => {
                    let view = commands::show_program(&repo, *id, config.undated_policy).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&view, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_program(&view)),
                    }
                }
                ProgramAction::Add { id, .. } => {
                    let entry = action.entry().context("add action without entry")??;
                    let exhibition = commands::add_program_entry(&repo, *id, entry).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&exhibition, cli.format))
                        }
                        OutputFormat::Pretty => println!(
                            "Updated:\n{}",
                            pretty::format_exhibition(&exhibition, today, language)
                        ),
                    }
                }
            }
        }
        Commands::Dashboard => {
            let dashboard = commands::dashboard(&repo, today).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&dashboard, cli.format)),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_dashboard(&dashboard, language))
                }
            }
        }
        Commands::Seed => {
            let seeded = commands::seed(&repo, today).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&seeded, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", pretty::format_seed(&seeded));
                    }
                }
            }
        }
    }

    Ok(())
}
