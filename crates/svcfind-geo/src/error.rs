use thiserror::Error;

/// Errors from the geocoding adapter.
///
/// Provider-side "no result" conditions are not errors; those surface as
/// `Ok(None)` from the resolution methods. Only a failed request or an
/// unreadable body lands here.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geocoding request failed")]
    Http(#[from] reqwest::Error),

    #[error("invalid geocoding url: {0}")]
    InvalidUrl(String),

    #[error("failed to decode {context} response")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
