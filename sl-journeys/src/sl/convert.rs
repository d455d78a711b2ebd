//! Conversion from journey planner DTOs to domain types.
//!
//! Timestamps are parsed here, once. A timestamp that fails to parse is
//! treated as missing rather than failing the whole journey, since the
//! rest of the pipeline already copes with partial timing data.

use crate::domain::{Journey, JourneyPoint, Leg, Location, Transport, TripTime, parse_trip_time};

use super::error::SlError;
use super::types::{
    JourneyDto, LegDto, LocationDto, PointDto, SystemMessage, TransportationDto, TripsResponse,
};

/// Convert a stop-finder candidate.
pub fn convert_location(dto: LocationDto) -> Location {
    Location {
        id: dto.id,
        name: dto.name,
        kind: dto.kind,
        is_best: dto.is_best,
        match_quality: dto.match_quality,
    }
}

/// Convert one itinerary.
pub fn convert_journey(dto: JourneyDto) -> Journey {
    Journey {
        trip_duration_secs: dto.trip_duration,
        trip_realtime_duration_secs: dto.trip_rt_duration,
        interchanges: dto.interchanges,
        legs: dto.legs.into_iter().map(convert_leg).collect(),
    }
}

fn convert_leg(dto: LegDto) -> Leg {
    Leg::new(
        convert_point(dto.origin),
        convert_point(dto.destination),
        convert_transport(dto.transportation),
    )
}

fn convert_point(dto: PointDto) -> JourneyPoint {
    JourneyPoint {
        planned_departure: parse_optional(dto.departure_time_planned.as_deref()),
        estimated_departure: parse_optional(dto.departure_time_estimated.as_deref()),
        planned_arrival: parse_optional(dto.arrival_time_planned.as_deref()),
        estimated_arrival: parse_optional(dto.arrival_time_estimated.as_deref()),
        name: dto.name,
    }
}

fn convert_transport(dto: TransportationDto) -> Transport {
    Transport {
        product: dto.product.name,
        disassembled_name: dto.disassembled_name,
        number: dto.number,
        name: dto.name,
    }
}

fn parse_optional(value: Option<&str>) -> Option<TripTime> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    match parse_trip_time(value) {
        Ok(t) => Some(t),
        Err(e) => {
            tracing::debug!("ignoring timestamp: {e}");
            None
        }
    }
}

/// Join the text of all error messages, if there are any.
pub fn error_text(messages: &[SystemMessage]) -> Option<String> {
    let errors: Vec<&str> = messages
        .iter()
        .filter(|m| m.is_error())
        .map(|m| m.text.as_str())
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(errors.join("; "))
    }
}

/// Turn a trips response into one batch of journeys.
///
/// Error messages only count when the response carries no journeys. An
/// empty response without error messages is an empty batch: the service
/// has nothing more for this time window.
pub fn convert_trips(response: TripsResponse) -> Result<Vec<Journey>, SlError> {
    if !response.journeys.is_empty() {
        return Ok(response.journeys.into_iter().map(convert_journey).collect());
    }

    match error_text(&response.messages) {
        Some(text) => Err(SlError::Messages(text)),
        None => Ok(Vec::new()),
    }
}
