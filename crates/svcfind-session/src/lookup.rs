//! The distance-ranked service lookup pipeline.

use serde::Serialize;

use svcfind_core::{distance_km, Coordinate, Service};
use svcfind_data::{DataClient, DataError};

use crate::state::SessionState;

/// A provider row plus its distance from the session location, when one was
/// known. Derived fresh on every lookup and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedService {
    pub service: Service,
    pub distance_km: Option<f64>,
}

/// Runs the lookup pipeline.
///
/// Admission control first: a missing or empty `service_type_id` or
/// `postcode` short-circuits to `Ok(vec![])` without any network traffic.
/// Admitted lookups query the backing service with both equality filters,
/// then rank by ascending distance when a location is present. Without a
/// location, rows come back unranked in service order.
///
/// An empty `Ok` means nothing matched; an `Err` means the query failed.
/// Callers can and should message those differently.
///
/// # Errors
///
/// Propagates the [`DataError`] from the provider query.
pub async fn lookup_services(
    client: &DataClient,
    service_type_id: Option<&str>,
    postcode: Option<&str>,
    location: Option<Coordinate>,
) -> Result<Vec<RankedService>, DataError> {
    let (Some(service_type_id), Some(postcode)) = (
        service_type_id.map(str::trim).filter(|s| !s.is_empty()),
        postcode.map(str::trim).filter(|s| !s.is_empty()),
    ) else {
        tracing::debug!("lookup skipped: service type or postcode not set");
        return Ok(Vec::new());
    };

    let services = client.list_services(service_type_id, postcode).await?;
    tracing::debug!(
        matched = services.len(),
        ranked = location.is_some(),
        "service lookup completed"
    );
    Ok(rank(services, location))
}

/// Runs [`lookup_services`] from a session's current filter inputs.
///
/// # Errors
///
/// Propagates the [`DataError`] from the provider query.
pub async fn lookup_for_session(
    client: &DataClient,
    state: &SessionState,
) -> Result<Vec<RankedService>, DataError> {
    lookup_services(
        client,
        state.service_type_id.as_deref(),
        state.postcode.as_deref(),
        state.location,
    )
    .await
}

/// Attaches distances and sorts ascending. The sort is stable, so equal
/// distances keep backing-service order, and rows without a usable coordinate
/// pair go after every ranked row in their original relative order.
#[must_use]
pub fn rank(services: Vec<Service>, location: Option<Coordinate>) -> Vec<RankedService> {
    let mut ranked: Vec<RankedService> = services
        .into_iter()
        .map(|service| {
            let distance = location
                .and_then(|here| service.coordinate().map(|there| distance_km(here, there)));
            RankedService {
                service,
                distance_km: distance,
            }
        })
        .collect();
    if location.is_some() {
        ranked.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }
    ranked
}
