//! The `search` subcommand walks the entry form flow. It validates the
//! inputs and resolves the postcode, then shows the category list the next
//! screen offers.

use anyhow::Context;
use clap::Args;

use svcfind_core::{validate_search, AppConfig, Coordinate};
use svcfind_data::DataClient;
use svcfind_geo::GeocodeClient;
use svcfind_session::{Action, SessionStore};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Six-digit postcode to search around.
    #[arg(long)]
    pub postcode: String,

    /// Optional age filter (0-99).
    #[arg(long)]
    pub age: Option<u8>,

    /// Already-known device latitude; skips the geocoding call.
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Already-known device longitude.
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the search entry flow.
///
/// # Errors
///
/// Returns an error if the postcode or age fails validation, either client
/// cannot be constructed, or the category listing fails.
pub async fn run(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let postcode = validate_search(&args.postcode, args.age)?;

    let mut store = SessionStore::new();
    store.dispatch(Action::SetPostcode(postcode.to_string()));
    store.dispatch(Action::SetAgeFilter(args.age));
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        store.dispatch(Action::SetLocation(Coordinate::new(lat, lon)?));
    }

    if store.state().location.is_none() {
        let geocode = GeocodeClient::new(config)?;
        match geocode.coordinates_for_postcode(postcode).await? {
            Some(location) => store.dispatch(Action::SetLocation(location)),
            None => tracing::warn!(%postcode, "postcode did not resolve to a position"),
        }
    }

    let data = DataClient::new(config)?;
    let types = data
        .list_service_types()
        .await
        .context("loading service categories")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }
    match store.state().location {
        Some(location) => println!(
            "postcode {postcode} is at {:.4}, {:.4}",
            location.latitude(),
            location.longitude()
        ),
        None => println!("postcode {postcode} accepted; no position found for it"),
    }
    println!("service categories:");
    for service_type in &types {
        println!(
            "  [{}] {} ({})",
            service_type.category_icon().name(),
            service_type.title,
            service_type.id
        );
        if let Some(description) = &service_type.description {
            println!("      {description}");
        }
    }
    Ok(())
}
