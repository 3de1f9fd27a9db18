//! HTTP adapter for the external geocoding provider.
//!
//! Resolves postcodes to coordinates and coordinates back to postcodes. The
//! reverse paths consult the district mapping table, because the provider's
//! area names are more reliable than its raw postcode field at the
//! granularity the lookups need.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeoError;
