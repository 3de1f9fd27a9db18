//! The `locate` subcommand reverse-geocodes a device position into a
//! postcode via the district mapping.

use anyhow::Context;
use clap::Args;

use svcfind_core::{AppConfig, Coordinate, DistrictMap};
use svcfind_geo::GeocodeClient;

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Device latitude.
    #[arg(long)]
    pub lat: f64,

    /// Device longitude.
    #[arg(long)]
    pub lon: f64,

    /// Resolve through the place-geocoding dialect instead of the postcode
    /// search endpoint.
    #[arg(long)]
    pub place: bool,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the reverse-geocoding flow.
///
/// # Errors
///
/// Returns an error if the coordinates are out of range, the district
/// mapping cannot be loaded, or the geocoding provider is unreachable.
pub async fn run(config: &AppConfig, args: LocateArgs) -> anyhow::Result<()> {
    let location = Coordinate::new(args.lat, args.lon)?;
    let districts = DistrictMap::load(&config.districts_path).with_context(|| {
        format!(
            "loading districts from {}",
            config.districts_path.display()
        )
    })?;

    let geocode = GeocodeClient::new(config)?;
    let postcode = if args.place {
        geocode
            .postcode_for_coordinates_by_place(location, &districts)
            .await?
    } else {
        geocode.postcode_for_coordinates(location, &districts).await?
    };

    if args.json {
        println!("{}", serde_json::json!({ "postcode": postcode }));
        return Ok(());
    }
    match postcode {
        Some(postcode) => println!(
            "position {:.4}, {:.4} is in postcode {postcode}",
            location.latitude(),
            location.longitude()
        ),
        None => println!("no postcode found for that position"),
    }
    Ok(())
}
