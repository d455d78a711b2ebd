//! Trip collection and detour filtering.
//!
//! This module answers: "what are the next few sensible ways from A to B?"
//!
//! The collector pages through the trip search with a departure-time
//! cursor until it holds enough unique, catchable candidates. The detour
//! filter then demotes itineraries that take the metro for a stop or two
//! where walking would do.

mod collect;
mod config;
mod detour;

pub use collect::{CollectError, TripCollector, TripProvider, TripRequest, next_cursor};
pub use config::{CollectConfig, RESULTS_TO_SHOW};
pub use detour::{
    DetourPolicy, TinyHopSegment, filter_detours, has_direct_walk_alternative, has_tiny_metro_hop,
    tiny_hop_segments,
};
