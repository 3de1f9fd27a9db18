//! Visit records persisted in the `patient_record` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::Service;

/// A recorded visit. The joined [`Service`] row is present on history reads
/// (`select=*,service(*)`) and absent on the row echoed back by an insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    pub id: String,
    pub service_id: String,
    pub postcode: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub service: Option<Service>,
}
