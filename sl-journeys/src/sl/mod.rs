//! SL journey planner client.
//!
//! This module provides an HTTP client for the SL (Stockholm public
//! transport) journey planner API.
//!
//! Key characteristics of the API:
//! - Stop search is fuzzy; several candidates come back, one of which may
//!   be flagged as the best match
//! - Trip search returns a small batch of itineraries anchored at a
//!   departure time, not "the next N trips"; callers page by moving the
//!   departure time forward
//! - Timing data is partial: any planned or estimated time may be missing

mod client;
mod convert;
mod error;
mod types;

pub use client::{SlClient, SlConfig, TripQuery, stop_finder_params};
pub use convert::{convert_journey, convert_location, convert_trips, error_text};
pub use error::SlError;
pub use types::{
    JourneyDto, LegDto, LocationDto, PointDto, ProductDto, StopFinderResponse, SystemMessage,
    TransportationDto, TripsResponse,
};
