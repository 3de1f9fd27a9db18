use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the backing data service client.
///
/// An empty result set is not an error; list methods return `Ok(vec![])` so
/// callers can tell "nothing matched" apart from "the query failed".
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data service request failed")]
    Http(#[from] reqwest::Error),

    #[error("data service api key is not a valid header value")]
    InvalidApiKey,

    #[error("invalid data service url: {0}")]
    InvalidUrl(String),

    #[error("data service rejected the request ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("data service returned unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("failed to decode {context} response")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("insert returned no representation")]
    EmptyRepresentation,
}
