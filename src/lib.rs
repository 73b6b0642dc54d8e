//! Fantasy IQ composer API
//!
//! The fantasy-team composition and validation engine: an in-memory
//! state machine between the upstream roster/prior-draft providers and
//! the downstream save endpoint, exposed over a small HTTP API.

pub mod api;
pub mod composer;
pub mod domain;
pub mod infrastructure;
