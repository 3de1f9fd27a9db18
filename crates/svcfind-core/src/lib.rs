//! Domain types, validation, configuration, and distance math shared by the
//! svcfind crates.

pub mod app_config;
pub mod config;
pub mod districts;
pub mod error;
pub mod location;
pub mod records;
pub mod services;
pub mod validate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use districts::DistrictMap;
pub use error::ConfigError;
pub use location::{distance_km, Coordinate};
pub use records::VisitRecord;
pub use services::{CategoryIcon, Service, ServiceType};
pub use validate::{validate_age, validate_search, Postcode, ValidationError};
