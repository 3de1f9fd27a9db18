//! Environment-driven configuration loading.
//!
//! All variables use the `SVCFIND_` prefix. [`load_app_config`] also reads a
//! local `.env` file when one exists; tests inject a lookup function instead
//! of touching the process environment.

use std::env::VarError;
use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::error::ConfigError;

const DEFAULT_GEOCODE_BASE_URL: &str = "https://api.geoapify.com";
const DEFAULT_COUNTRY_CODE: &str = "uz";
const DEFAULT_DISTRICTS_PATH: &str = "config/districts.yaml";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("svcfind/", env!("CARGO_PKG_VERSION"));
const DEFAULT_LOG_LEVEL: &str = "info";

/// Loads configuration from a `.env` file (if present) and the process
/// environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] for absent required variables and
/// [`ConfigError::InvalidEnvVar`] for unparseable values.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Loads configuration from the process environment only.
///
/// # Errors
///
/// Same as [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let require = |key: &str| lookup(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()));
    let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|_| default.to_owned());
    let parse_u64 = |key: &str, default: u64| match lookup(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
            var: key.to_owned(),
            reason: format!("expected an integer, got {raw:?}"),
        }),
        Err(_) => Ok(default),
    };

    Ok(AppConfig {
        data_url: require("SVCFIND_DATA_URL")?,
        data_api_key: require("SVCFIND_DATA_API_KEY")?,
        geocode_base_url: or_default("SVCFIND_GEOCODE_BASE_URL", DEFAULT_GEOCODE_BASE_URL),
        geocode_api_key: require("SVCFIND_GEOCODE_API_KEY")?,
        country_code: or_default("SVCFIND_COUNTRY_CODE", DEFAULT_COUNTRY_CODE),
        districts_path: PathBuf::from(or_default(
            "SVCFIND_DISTRICTS_PATH",
            DEFAULT_DISTRICTS_PATH,
        )),
        http_timeout_secs: parse_u64("SVCFIND_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        user_agent: or_default("SVCFIND_USER_AGENT", DEFAULT_USER_AGENT),
        log_level: or_default("SVCFIND_LOG_LEVEL", DEFAULT_LOG_LEVEL),
    })
}
