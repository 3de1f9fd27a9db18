//! Command-line surface for the service finder.
//!
//! Each subcommand drives one screen flow end to end: resolve configuration,
//! build the clients, walk the session store the way the UI would, print the
//! result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use svcfind_core::{load_app_config, AppConfig};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "svcfind")]
#[command(about = "Find nearby public services by postcode or position")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a postcode, resolve its position, and list the categories.
    Search(commands::search::SearchArgs),
    /// Resolve a device position to a postcode.
    Locate(commands::locate::LocateArgs),
    /// List providers of a category for a postcode, nearest first.
    Services(commands::services::ServicesArgs),
    /// Record a visit to a provider.
    Confirm(commands::confirm::ConfirmArgs),
    /// Show recorded visits, newest first.
    History(commands::history::HistoryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_app_config().context("loading configuration")?;
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Search(args) => commands::search::run(&config, args).await,
        Command::Locate(args) => commands::locate::run(&config, args).await,
        Command::Services(args) => commands::services::run(&config, args).await,
        Command::Confirm(args) => commands::confirm::run(&config, args).await,
        Command::History(args) => commands::history::run(&config, args).await,
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
