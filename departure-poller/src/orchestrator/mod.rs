//! Station fetch orchestration.
//!
//! One polling cycle fans out a fetch per configured station, waits for all
//! of them, and fans the results back in. Any failed station fails the
//! whole cycle.

mod failure;
mod fetch;
mod source;

pub use failure::AggregateFailure;
pub use fetch::StationFetchOrchestrator;
pub use source::DepartureSource;
