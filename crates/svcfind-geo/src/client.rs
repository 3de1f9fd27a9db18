//! Client for the geocoding provider's postcode and place endpoints.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use svcfind_core::{AppConfig, Coordinate, DistrictMap, Postcode};

use crate::error::GeoError;
use crate::types::{FeatureCollection, PlaceGeocodeResponse};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the geocoding provider.
///
/// Resolution methods return `Ok(None)` whenever the provider answers but has
/// nothing usable: zero features, features without coordinates, or a
/// non-success status. A typed [`GeoError`] means the request itself failed or
/// the body could not be decoded, so callers can distinguish "not found" from
/// "could not ask". No method retries.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
    api_key: String,
    country_code: String,
}

impl GeocodeClient {
    /// Creates a client pointed at the configured provider base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`GeoError::InvalidUrl`] if the configured base URL
    /// does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, GeoError> {
        Self::with_base_url(config, &config.geocode_base_url)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::new`].
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(config.user_agent.as_str())
            .build()?;

        // Normalise: exactly one trailing slash so joined endpoint paths
        // extend the base instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeoError::InvalidUrl(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.geocode_api_key.clone(),
            country_code: config.country_code.clone(),
        })
    }

    /// Forward-geocodes a postcode to a coordinate, scoped to the configured
    /// country. Takes the first feature the provider returns.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure.
    /// - [`GeoError::Deserialize`] if the body is not the expected shape.
    pub async fn coordinates_for_postcode(
        &self,
        postcode: Postcode,
    ) -> Result<Option<Coordinate>, GeoError> {
        let text = postcode.to_string();
        let url = self.build_url(
            "v1/postcode/list",
            &[
                ("text", text.as_str()),
                ("countrycode", &self.country_code),
                ("apiKey", &self.api_key),
            ],
        )?;
        let Some(collection) = self
            .request_json::<FeatureCollection>(url, "postcode list")
            .await?
        else {
            return Ok(None);
        };
        let Some(feature) = collection.features.into_iter().next() else {
            tracing::debug!(%postcode, "no features for postcode");
            return Ok(None);
        };
        let (Some(lat), Some(lon)) = (feature.properties.lat, feature.properties.lon) else {
            tracing::warn!(%postcode, "postcode feature has no coordinates");
            return Ok(None);
        };
        match Coordinate::new(lat, lon) {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(err) => {
                tracing::warn!(%postcode, %err, "postcode feature has unusable coordinates");
                Ok(None)
            }
        }
    }

    /// Reverse-geocodes a position to a postcode.
    ///
    /// The first feature's `district` name (or `county` when the district is
    /// absent) is looked up in the mapping table; a mapped postcode wins over
    /// the feature's raw `postcode` field, which is only a fallback.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure.
    /// - [`GeoError::Deserialize`] if the body is not the expected shape.
    pub async fn postcode_for_coordinates(
        &self,
        location: Coordinate,
        districts: &DistrictMap,
    ) -> Result<Option<String>, GeoError> {
        let lat = location.latitude().to_string();
        let lon = location.longitude().to_string();
        let url = self.build_url(
            "v1/postcode/search",
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("apiKey", &self.api_key),
            ],
        )?;
        let Some(collection) = self
            .request_json::<FeatureCollection>(url, "postcode search")
            .await?
        else {
            return Ok(None);
        };
        let Some(feature) = collection.features.into_iter().next() else {
            tracing::debug!("no features for position");
            return Ok(None);
        };
        let properties = feature.properties;
        let area = properties
            .district
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                properties
                    .county
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
            });
        if let Some(name) = area {
            if let Some(mapped) = districts.postcode_for(name) {
                return Ok(Some(mapped.to_owned()));
            }
            tracing::debug!(area = name, "area name has no mapping entry");
        }
        Ok(properties.postcode.filter(|raw| !raw.trim().is_empty()))
    }

    /// Reverse resolution against the place-geocoding dialect, for
    /// deployments keyed to that provider: scans every result's address
    /// components for one typed `neighborhood` with a mapping entry.
    ///
    /// Unlike [`GeocodeClient::postcode_for_coordinates`] this path never
    /// falls back to a raw provider postcode; the place dialect does not
    /// return one at usable granularity.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure.
    /// - [`GeoError::Deserialize`] if the body is not the expected shape.
    pub async fn postcode_for_coordinates_by_place(
        &self,
        location: Coordinate,
        districts: &DistrictMap,
    ) -> Result<Option<String>, GeoError> {
        let latlng = format!("{},{}", location.latitude(), location.longitude());
        let url = self.build_url(
            "maps/api/geocode/json",
            &[("latlng", latlng.as_str()), ("key", &self.api_key)],
        )?;
        let Some(response) = self
            .request_json::<PlaceGeocodeResponse>(url, "place geocode")
            .await?
        else {
            return Ok(None);
        };
        if response.status != "OK" {
            tracing::debug!(status = %response.status, "place geocode returned no result");
            return Ok(None);
        }
        for result in &response.results {
            for component in &result.address_components {
                if !component.types.iter().any(|kind| kind == "neighborhood") {
                    continue;
                }
                let mapped = districts
                    .postcode_for(&component.long_name)
                    .or_else(|| districts.postcode_for(&component.short_name));
                if let Some(postcode) = mapped {
                    return Ok(Some(postcode.to_owned()));
                }
            }
        }
        Ok(None)
    }

    /// Joins an endpoint path onto the base URL and appends percent-encoded
    /// query parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GeoError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| GeoError::InvalidUrl(format!("endpoint '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET + decode. `Ok(None)` on a non-success status; the resolution
    /// methods treat that the same as an empty answer.
    async fn request_json<T>(&self, url: Url, context: &str) -> Result<Option<T>, GeoError>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, context, "geocoding provider returned an error status");
            return Ok(None);
        }
        let body = response.text().await?;
        let parsed = serde_json::from_str(&body).map_err(|source| GeoError::Deserialize {
            context: context.to_owned(),
            source,
        })?;
        Ok(Some(parsed))
    }
}
