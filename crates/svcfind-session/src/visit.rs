//! Visit confirmation: validate locally, then persist once.

use thiserror::Error;

use svcfind_core::{Postcode, ValidationError, VisitRecord};
use svcfind_data::{DataClient, DataError, NewVisit};

/// Errors from confirming a visit.
#[derive(Debug, Error)]
pub enum VisitError {
    /// The inputs were rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The insert failed; the visit must not be assumed recorded.
    #[error("failed to record visit")]
    Persist(#[from] DataError),
}

/// Validates the inputs and records the visit against the backing service.
///
/// Validation failures never reach the network. A failed insert is returned
/// as-is, with no retry; the caller decides whether to resubmit. Session
/// state is never touched here: clearing `current_service` and appending to
/// `selected_services` is the caller's move after success.
///
/// # Errors
///
/// [`VisitError::Validation`] when `service_id` is empty or the postcode is
/// malformed or out of range; [`VisitError::Persist`] when the insert fails.
pub async fn confirm_visit(
    client: &DataClient,
    service_id: &str,
    postcode: &str,
) -> Result<VisitRecord, VisitError> {
    let service_id = service_id.trim();
    if service_id.is_empty() {
        return Err(ValidationError::MissingServiceId.into());
    }
    let postcode = Postcode::parse(postcode)?;

    let record = client
        .insert_visit(&NewVisit {
            service_id: service_id.to_owned(),
            postcode: postcode.to_string(),
        })
        .await?;
    tracing::info!(record_id = %record.id, "visit recorded");
    Ok(record)
}
