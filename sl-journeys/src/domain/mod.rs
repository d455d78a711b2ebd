//! Domain types for the journey pipeline.
//!
//! Upstream data is converted into these types once, at the client
//! boundary: timestamps are parsed into local time and transport labels
//! are kept as text so the mode can be classified on demand.

mod journey;
mod location;
mod mode;
mod names;
mod time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use journey::{Journey, JourneyKey, JourneyPoint, Leg, Transport};
pub use location::{Location, pick_best_location};
pub use mode::TransportMode;
pub use names::{names_match, place_name, short_stop_name};
pub use time::{
    TimeError, TripTime, UNKNOWN_TIME, floor_to_minute, format_duration, format_hhmm,
    parse_trip_time,
};
