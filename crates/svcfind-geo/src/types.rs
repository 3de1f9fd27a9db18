//! Wire shapes returned by the geocoding provider.
//!
//! Every field is optional on the wire; absence is handled at the call site,
//! not by failing deserialization.

use serde::Deserialize;

/// GeoJSON-style envelope returned by the postcode endpoints.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
}

/// Properties of a postcode feature. Forward lookups read `lat`/`lon`;
/// reverse lookups read the area names and the raw `postcode`.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

/// Envelope of the place-geocoding dialect: a textual status plus results
/// holding typed address components.
#[derive(Debug, Deserialize)]
pub struct PlaceGeocodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
