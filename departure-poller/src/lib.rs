//! Departure board poller for SL Transport.
//!
//! Periodically fetches upcoming departures for a set of configured
//! stations, fixes up and filters them, and publishes one notification per
//! polling cycle: either every station's departures, or a single failure.

pub mod config;
pub mod domain;
pub mod notify;
pub mod orchestrator;
pub mod pipeline;
pub mod schedule;
pub mod sl;
