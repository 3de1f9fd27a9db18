//! Wire shapes specific to the data service.

use serde::{Deserialize, Serialize};

/// Insert payload for a visit record. Server-owned columns (`id`,
/// `created_at`, `updated_at`) are never sent.
#[derive(Debug, Clone, Serialize)]
pub struct NewVisit {
    pub service_id: String,
    pub postcode: String,
}

/// Error body the data service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
