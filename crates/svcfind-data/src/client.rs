//! Client for the backing data service's REST surface.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use svcfind_core::{AppConfig, Service, ServiceType, VisitRecord};

use crate::error::DataError;
use crate::types::{ApiErrorBody, NewVisit};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the backing data service.
///
/// Every request carries the service key both as the `apikey` header and as a
/// bearer token; resources live under `/rest/v1/`. No method retries.
#[derive(Debug, Clone)]
pub struct DataClient {
    client: Client,
    base_url: Url,
}

impl DataClient {
    /// Creates a client pointed at the configured data service URL.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidApiKey`] if the key cannot travel as a
    /// header value, [`DataError::InvalidUrl`] if the configured URL does not
    /// parse, and [`DataError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, DataError> {
        Self::with_base_url(config, &config.data_url)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`DataClient::new`].
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, DataError> {
        let mut headers = HeaderMap::new();
        let mut api_key =
            HeaderValue::from_str(&config.data_api_key).map_err(|_| DataError::InvalidApiKey)?;
        api_key.set_sensitive(true);
        headers.insert("apikey", api_key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.data_api_key))
            .map_err(|_| DataError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        // Normalise: exactly one trailing slash so joined resource paths
        // extend the base instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| DataError::InvalidUrl(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// All provider category rows.
    ///
    /// # Errors
    ///
    /// - [`DataError::Http`] on network failure.
    /// - [`DataError::Api`] / [`DataError::UnexpectedStatus`] on a rejected
    ///   query.
    /// - [`DataError::Deserialize`] if the body is not the expected shape.
    pub async fn list_service_types(&self) -> Result<Vec<ServiceType>, DataError> {
        let url = self.build_url("service_type", &[("select", "*")])?;
        self.get_json(url, "service_type list").await
    }

    /// Provider rows matching both equality filters. Order is whatever the
    /// service returns; ranking happens client-side.
    ///
    /// # Errors
    ///
    /// Same as [`DataClient::list_service_types`].
    pub async fn list_services(
        &self,
        service_type_id: &str,
        postcode: &str,
    ) -> Result<Vec<Service>, DataError> {
        let type_filter = format!("eq.{service_type_id}");
        let postcode_filter = format!("eq.{postcode}");
        let url = self.build_url(
            "service",
            &[
                ("select", "*"),
                ("service_type_id", type_filter.as_str()),
                ("postcode", postcode_filter.as_str()),
            ],
        )?;
        self.get_json(url, "service list").await
    }

    /// A single provider row by id, when one exists.
    ///
    /// # Errors
    ///
    /// Same as [`DataClient::list_service_types`].
    pub async fn get_service(&self, service_id: &str) -> Result<Option<Service>, DataError> {
        let id_filter = format!("eq.{service_id}");
        let url = self.build_url(
            "service",
            &[("select", "*"), ("id", id_filter.as_str()), ("limit", "1")],
        )?;
        let rows: Vec<Service> = self.get_json(url, "service by id").await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts a visit record and returns the created row.
    ///
    /// # Errors
    ///
    /// As for the list methods, plus [`DataError::EmptyRepresentation`] when
    /// the service accepts the insert but echoes no row back.
    pub async fn insert_visit(&self, visit: &NewVisit) -> Result<VisitRecord, DataError> {
        let url = self.build_url("patient_record", &[])?;
        tracing::debug!(service_id = %visit.service_id, "inserting visit record");
        let response = self
            .client
            .post(url)
            .header("Prefer", "return=representation")
            .json(visit)
            .send()
            .await?;
        let rows: Vec<VisitRecord> = Self::read_json(response, "visit insert").await?;
        rows.into_iter()
            .next()
            .ok_or(DataError::EmptyRepresentation)
    }

    /// All visit records with their joined service rows, newest first.
    ///
    /// # Errors
    ///
    /// Same as [`DataClient::list_service_types`].
    pub async fn list_visits(&self) -> Result<Vec<VisitRecord>, DataError> {
        let url = self.build_url(
            "patient_record",
            &[("select", "*,service(*)"), ("order", "created_at.desc")],
        )?;
        self.get_json(url, "visit history").await
    }

    /// Joins a resource path under `rest/v1/` and appends percent-encoded
    /// query parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, DataError> {
        let mut url = self
            .base_url
            .join(&format!("rest/v1/{resource}"))
            .map_err(|e| DataError::InvalidUrl(format!("resource '{resource}': {e}")))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url, context: &str) -> Result<T, DataError>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        Self::read_json(response, context).await
    }

    async fn read_json<T>(response: reqwest::Response, context: &str) -> Result<T, DataError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }
        serde_json::from_str(&body).map_err(|source| DataError::Deserialize {
            context: context.to_owned(),
            source,
        })
    }

    /// Maps a rejected response to [`DataError::Api`] when the service sent a
    /// readable `{"message": …}` body, [`DataError::UnexpectedStatus`]
    /// otherwise.
    fn api_error(status: StatusCode, body: &str) -> DataError {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody {
                message: Some(message),
            }) if !message.trim().is_empty() => DataError::Api { status, message },
            _ => DataError::UnexpectedStatus(status),
        }
    }
}
