//! Runtime configuration shared by the clients and the CLI.

use std::fmt;
use std::path::PathBuf;

/// Resolved application configuration. Built from the environment by
/// [`crate::config::load_app_config`]; tests construct it directly.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the backing data service.
    pub data_url: String,
    /// API key sent to the data service on every request.
    pub data_api_key: String,
    /// Base URL of the geocoding provider.
    pub geocode_base_url: String,
    /// API key for the geocoding provider.
    pub geocode_api_key: String,
    /// ISO 3166-1 alpha-2 country code scoping forward geocoding.
    pub country_code: String,
    /// Path to the districts YAML file.
    pub districts_path: PathBuf,
    /// HTTP timeout applied to both clients, in seconds.
    pub http_timeout_secs: u64,
    /// User-Agent header for outbound requests.
    pub user_agent: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_url", &self.data_url)
            .field("data_api_key", &"<redacted>")
            .field("geocode_base_url", &self.geocode_base_url)
            .field("geocode_api_key", &"<redacted>")
            .field("country_code", &self.country_code)
            .field("districts_path", &self.districts_path)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_keys() {
        let config = AppConfig {
            data_url: "https://example.supabase.co".to_owned(),
            data_api_key: "secret-data-key".to_owned(),
            geocode_base_url: "https://api.geoapify.com".to_owned(),
            geocode_api_key: "secret-geo-key".to_owned(),
            country_code: "uz".to_owned(),
            districts_path: PathBuf::from("config/districts.yaml"),
            http_timeout_secs: 30,
            user_agent: "svcfind/0.1".to_owned(),
            log_level: "info".to_owned(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-data-key"));
        assert!(!rendered.contains("secret-geo-key"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("example.supabase.co"));
    }
}
