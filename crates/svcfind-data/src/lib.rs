//! HTTP client for the backing data service.
//!
//! The service exposes a PostgREST-style query surface over the
//! `service_type`, `service`, and `patient_record` resources. This crate
//! covers exactly the reads and the one insert the flows need; filtering is
//! equality-only, matching what the service indexes.

pub mod client;
pub mod error;
pub mod types;

pub use client::DataClient;
pub use error::DataError;
pub use types::NewVisit;
