//! SL Transport (Stockholm public transport) departures client.
//!
//! This module provides an HTTP client for the SL Transport API:
//! `GET /v1/sites/{siteId}/departures?forecast={minutes}[&direction={code}]`.
//!
//! Key characteristics of the API:
//! - Line ids are numeric; the public designation is a separate string
//! - Times are local (Europe/Stockholm) ISO 8601 strings without an offset
//! - Direction codes are 0, 1 or 2 and are per line, not per station

mod client;
mod convert;
mod error;
mod types;

pub use client::{SlClient, SlConfig};
pub use convert::{NormalizeError, normalize, normalize_record};
pub use error::{FetchError, TRANSPORT_ERROR_STATUS};
pub use types::{DeparturesResponse, RawDeparture, RawLine, RawRecord};
