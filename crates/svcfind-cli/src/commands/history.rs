//! The `history` subcommand prints recorded visits with their provider
//! rows, newest first.

use anyhow::Context;
use clap::Args;

use svcfind_core::AppConfig;
use svcfind_data::DataClient;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the visit history flow.
///
/// # Errors
///
/// Returns an error if the data client cannot be constructed or the
/// history query fails.
pub async fn run(config: &AppConfig, args: HistoryArgs) -> anyhow::Result<()> {
    let data = DataClient::new(config)?;
    let visits = data.list_visits().await.context("loading visit history")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&visits)?);
        return Ok(());
    }
    if visits.is_empty() {
        println!("no visits recorded yet");
        return Ok(());
    }
    for visit in &visits {
        let date = visit.created_at.format("%Y-%m-%d %H:%M");
        match &visit.service {
            Some(service) => {
                println!("{date}  {}", service.name);
                println!(
                    "                  {} | {}",
                    service.address, service.telephone
                );
            }
            None => println!("{date}  service {}", visit.service_id),
        }
    }
    Ok(())
}
