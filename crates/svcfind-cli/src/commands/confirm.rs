//! The `confirm` subcommand records a visit, then updates the session the
//! way the detail screen does on success.

use clap::Args;

use svcfind_core::AppConfig;
use svcfind_data::DataClient;
use svcfind_session::{confirm_visit, Action, SessionStore};

#[derive(Debug, Args)]
pub struct ConfirmArgs {
    /// Provider id the visit is for.
    #[arg(long)]
    pub service_id: String,

    /// Postcode recorded with the visit.
    #[arg(long)]
    pub postcode: String,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the visit confirmation flow.
///
/// # Errors
///
/// Returns an error if the inputs fail validation, the data client cannot
/// be constructed, or the insert is rejected. A failed post-insert provider
/// fetch only logs a warning.
pub async fn run(config: &AppConfig, args: ConfirmArgs) -> anyhow::Result<()> {
    let data = DataClient::new(config)?;
    let record = confirm_visit(&data, &args.service_id, &args.postcode).await?;

    // Replay the detail screen's transitions: the provider becomes current,
    // then the confirmation clears it and appends to the visited list.
    let mut store = SessionStore::new();
    match data.get_service(args.service_id.trim()).await {
        Ok(Some(service)) => {
            store.dispatch(Action::SetCurrentService(Some(service.clone())));
            store.dispatch(Action::SetCurrentService(None));
            store.dispatch(Action::AddSelectedService(service));
        }
        Ok(None) => {
            tracing::warn!(
                service_id = args.service_id.trim(),
                "confirmed provider row not found"
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not load the provider row after confirming");
        }
    }
    tracing::debug!(
        selected = store.state().selected_services.len(),
        "session updated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }
    println!(
        "visit recorded: {} (service {}, postcode {}, at {})",
        record.id,
        record.service_id,
        record.postcode,
        record.created_at.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
