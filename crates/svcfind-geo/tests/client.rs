//! Geocoding client tests against a mock provider.

use std::path::PathBuf;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use svcfind_core::districts::DistrictEntry;
use svcfind_core::{AppConfig, Coordinate, DistrictMap, Postcode};
use svcfind_geo::{GeoError, GeocodeClient};

fn test_config() -> AppConfig {
    AppConfig {
        data_url: "https://unused.example".to_owned(),
        data_api_key: "unused".to_owned(),
        geocode_base_url: "https://unused.example".to_owned(),
        geocode_api_key: "test-key".to_owned(),
        country_code: "uz".to_owned(),
        districts_path: PathBuf::from("config/districts.yaml"),
        http_timeout_secs: 5,
        user_agent: "svcfind-tests".to_owned(),
        log_level: "info".to_owned(),
    }
}

fn client_for(server: &MockServer) -> GeocodeClient {
    GeocodeClient::with_base_url(&test_config(), &server.uri()).unwrap()
}

fn districts() -> DistrictMap {
    DistrictMap::from_entries(&[
        DistrictEntry {
            name: "Chilonzor".to_owned(),
            postcode: "100115".to_owned(),
        },
        DistrictEntry {
            name: "Yunusobod".to_owned(),
            postcode: "100084".to_owned(),
        },
    ])
    .unwrap()
}

#[tokio::test]
async fn forward_lookup_takes_the_first_feature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/list"))
        .and(query_param("text", "100115"))
        .and(query_param("countrycode", "uz"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                { "properties": { "lat": 41.2846, "lon": 69.2034 } },
                { "properties": { "lat": 40.0, "lon": 65.0 } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let coordinate = client
        .coordinates_for_postcode(Postcode::parse("100115").unwrap())
        .await
        .unwrap()
        .expect("a coordinate");
    assert!((coordinate.latitude() - 41.2846).abs() < 1e-9);
    assert!((coordinate.longitude() - 69.2034).abs() < 1e-9);
}

#[tokio::test]
async fn forward_lookup_returns_none_for_zero_features() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resolved = client
        .coordinates_for_postcode(Postcode::parse("100115").unwrap())
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn forward_lookup_returns_none_when_the_feature_has_no_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [ { "properties": {} } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resolved = client
        .coordinates_for_postcode(Postcode::parse("100115").unwrap())
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn forward_lookup_collapses_provider_errors_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/list"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resolved = client
        .coordinates_for_postcode(Postcode::parse("100115").unwrap())
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[tokio::test]
async fn forward_lookup_reports_malformed_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .coordinates_for_postcode(Postcode::parse("100115").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::Deserialize { .. }));
}

#[tokio::test]
async fn reverse_lookup_prefers_the_mapped_district_postcode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/search"))
        .and(query_param("lat", "41.2846"))
        .and(query_param("lon", "69.2034"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                { "properties": { "district": "Chilonzor", "postcode": "700000" } }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client
        .postcode_for_coordinates(Coordinate::new(41.2846, 69.2034).unwrap(), &districts())
        .await
        .unwrap();
    assert_eq!(postcode.as_deref(), Some("100115"));
}

#[tokio::test]
async fn reverse_lookup_falls_back_to_the_county_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                { "properties": { "county": "Yunusobod" } }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client
        .postcode_for_coordinates(Coordinate::new(41.36, 69.29).unwrap(), &districts())
        .await
        .unwrap();
    assert_eq!(postcode.as_deref(), Some("100084"));
}

#[tokio::test]
async fn reverse_lookup_falls_back_to_the_raw_postcode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [
                { "properties": { "district": "Qibray", "postcode": "111201" } }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client
        .postcode_for_coordinates(Coordinate::new(41.38, 69.46).unwrap(), &districts())
        .await
        .unwrap();
    assert_eq!(postcode.as_deref(), Some("111201"));
}

#[tokio::test]
async fn reverse_lookup_returns_none_for_a_bare_feature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/postcode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [ { "properties": {} } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client
        .postcode_for_coordinates(Coordinate::new(41.0, 69.0).unwrap(), &districts())
        .await
        .unwrap();
    assert!(postcode.is_none());
}

#[tokio::test]
async fn place_lookup_matches_a_neighborhood_component() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("latlng", "41.2846,69.2034"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                {
                    "address_components": [
                        { "long_name": "Tashkent", "short_name": "Tashkent", "types": ["locality"] },
                        { "long_name": "Chilonzor", "short_name": "Chilonzor", "types": ["neighborhood", "political"] }
                    ]
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client
        .postcode_for_coordinates_by_place(
            Coordinate::new(41.2846, 69.2034).unwrap(),
            &districts(),
        )
        .await
        .unwrap();
    assert_eq!(postcode.as_deref(), Some("100115"));
}

#[tokio::test]
async fn place_lookup_returns_none_when_the_status_is_not_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let postcode = client
        .postcode_for_coordinates_by_place(Coordinate::new(41.0, 69.0).unwrap(), &districts())
        .await
        .unwrap();
    assert!(postcode.is_none());
}
