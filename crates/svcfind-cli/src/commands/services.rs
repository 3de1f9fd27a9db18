//! The `services` subcommand runs the lookup pipeline from the session
//! filters and prints the ranked rows.

use anyhow::Context;
use clap::Args;

use svcfind_core::{AppConfig, Coordinate, Postcode};
use svcfind_data::DataClient;
use svcfind_session::{lookup_for_session, Action, SessionStore};

#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Category (service type) id to list.
    #[arg(long)]
    pub category: String,

    /// Postcode scoping the lookup.
    #[arg(long)]
    pub postcode: String,

    /// Device latitude for distance ranking.
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Device longitude for distance ranking.
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the provider list flow.
///
/// # Errors
///
/// Returns an error if the postcode or coordinates fail validation, the
/// data client cannot be constructed, or the lookup itself fails.
pub async fn run(config: &AppConfig, args: ServicesArgs) -> anyhow::Result<()> {
    let postcode = Postcode::parse(&args.postcode)?;

    let mut store = SessionStore::new();
    store.dispatch(Action::SetPostcode(postcode.to_string()));
    store.dispatch(Action::SetServiceType(args.category.clone()));
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        store.dispatch(Action::SetLocation(Coordinate::new(lat, lon)?));
    }

    let data = DataClient::new(config)?;
    let ranked = lookup_for_session(&data, store.state())
        .await
        .context("querying services")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }
    if ranked.is_empty() {
        println!(
            "no providers found for category {} in postcode {postcode}",
            args.category
        );
        return Ok(());
    }
    for (index, row) in ranked.iter().enumerate() {
        match row.distance_km {
            Some(km) => println!("{:>2}. {}  ({km:.1} km)", index + 1, row.service.name),
            None => println!("{:>2}. {}", index + 1, row.service.name),
        }
        println!("    {} | {}", row.service.address, row.service.telephone);
    }
    Ok(())
}
