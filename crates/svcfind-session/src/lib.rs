//! Session state, the distance-ranked service lookup, and the visit recorder.
//!
//! Everything here is client-session scoped: state lives for one session and
//! is never persisted. The only durable writes go through the visit recorder
//! into the backing data service.

pub mod lookup;
pub mod state;
pub mod visit;

pub use lookup::{lookup_for_session, lookup_services, rank, RankedService};
pub use state::{reduce, Action, SessionState, SessionStore};
pub use visit::{confirm_visit, VisitError};
