//! Domain types for departure polling.
//!
//! These types are the validated, provider-independent view of a
//! departure board. Wire names used by the display front end are set
//! with serde attributes here so the rest of the crate can use plain
//! Rust naming.

mod clock;
mod departure;
mod direction;
mod line;

pub use clock::{ClockTime, ClockTimeError};
pub use departure::{Departure, StationResult, UNNAMED_STATION};
pub use direction::{Direction, RemapOutOfRange};
pub use line::LineId;
