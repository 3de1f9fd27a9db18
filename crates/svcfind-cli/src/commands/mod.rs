//! Subcommand handlers, one module per screen flow.

pub mod confirm;
pub mod history;
pub mod locate;
pub mod search;
pub mod services;
