//! Journey, leg and journey-point types.
//!
//! A `Journey` is one candidate itinerary as returned by the trip search:
//! an ordered list of legs from origin to destination. Timing data is
//! often partial. Any of the four timestamps on a point may be missing,
//! and estimated (realtime) values take precedence over planned ones.

use chrono::Duration;

use super::mode::TransportMode;
use super::names::short_stop_name;
use super::time::TripTime;

/// A stop or place at either end of a leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyPoint {
    pub name: String,
    pub planned_departure: Option<TripTime>,
    pub estimated_departure: Option<TripTime>,
    pub planned_arrival: Option<TripTime>,
    pub estimated_arrival: Option<TripTime>,
}

impl JourneyPoint {
    /// Create a point with a name and no timing data.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Best known departure from this point.
    ///
    /// Falls back to the arrival times when no departure is known.
    pub fn departure(&self) -> Option<TripTime> {
        self.estimated_departure
            .or(self.planned_departure)
            .or(self.estimated_arrival)
            .or(self.planned_arrival)
    }

    /// Best known arrival at this point.
    ///
    /// Falls back to the departure times when no arrival is known.
    pub fn arrival(&self) -> Option<TripTime> {
        self.estimated_arrival
            .or(self.planned_arrival)
            .or(self.estimated_departure)
            .or(self.planned_departure)
    }

    /// The stop part of the point name.
    pub fn short_name(&self) -> &str {
        short_stop_name(&self.name)
    }
}

/// What carries a leg: product (mode) name plus line identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transport {
    /// Product name, e.g. "Metro", "Bus", "Footpath".
    pub product: String,
    /// Short line designation, e.g. "17".
    pub disassembled_name: String,
    pub number: String,
    pub name: String,
}

impl Transport {
    /// Create a transport with a product name and line designation.
    pub fn new(product: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            disassembled_name: line.into(),
            ..Self::default()
        }
    }

    /// Human-readable label such as "Metro 17", "Bus" or "Footpath".
    ///
    /// ```
    /// use sl_journeys::domain::Transport;
    ///
    /// assert_eq!(Transport::new("Metro", "17").label(), "Metro 17");
    /// assert_eq!(Transport::new("Footpath", "").label(), "Footpath");
    /// assert_eq!(Transport::new("Bus", "bus").label(), "Bus");
    /// assert_eq!(Transport::new("", "").label(), "Unknown");
    /// ```
    pub fn label(&self) -> String {
        let mode = self.product.trim();
        let line = [&self.disassembled_name, &self.number, &self.name]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("");

        match (mode.is_empty(), line.is_empty()) {
            (true, true) => "Unknown".to_string(),
            (true, false) => line.to_string(),
            (false, true) => mode.to_string(),
            (false, false) if mode.eq_ignore_ascii_case(line) => mode.to_string(),
            (false, false) => format!("{mode} {line}"),
        }
    }

    pub fn mode(&self) -> TransportMode {
        TransportMode::classify(&self.label())
    }
}

/// One continuous segment of a journey using a single transport mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub origin: JourneyPoint,
    pub destination: JourneyPoint,
    pub transport: Transport,
}

impl Leg {
    pub fn new(origin: JourneyPoint, destination: JourneyPoint, transport: Transport) -> Self {
        Self {
            origin,
            destination,
            transport,
        }
    }

    pub fn departure_time(&self) -> Option<TripTime> {
        self.origin.departure()
    }

    pub fn arrival_time(&self) -> Option<TripTime> {
        self.destination.arrival()
    }

    /// Arrival minus departure, when both are known. May be negative on
    /// inconsistent upstream data.
    pub fn duration(&self) -> Option<Duration> {
        Some(self.arrival_time()?.signed_duration_since(self.departure_time()?))
    }

    pub fn label(&self) -> String {
        self.transport.label()
    }

    pub fn mode(&self) -> TransportMode {
        self.transport.mode()
    }

    pub fn is_walk(&self) -> bool {
        self.mode() == TransportMode::Walk
    }

    pub fn is_metro(&self) -> bool {
        self.mode() == TransportMode::Metro
    }
}

/// Identity used to collapse itineraries that describe the same trip.
///
/// Built only from the overall departure and arrival instants (`None`
/// standing for "unknown") and the short names of the first origin and
/// last destination. Internal leg differences are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JourneyKey {
    pub departure: Option<TripTime>,
    pub arrival: Option<TripTime>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// A candidate itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Planned duration in seconds (0 when unknown).
    pub trip_duration_secs: i64,
    /// Realtime duration in seconds (0 when unknown).
    pub trip_realtime_duration_secs: i64,
    pub interchanges: u32,
    /// Legs in order, origin to destination. Empty means no timing data.
    pub legs: Vec<Leg>,
}

impl Journey {
    /// Create a journey from legs, with unknown durations and no interchanges.
    pub fn from_legs(legs: Vec<Leg>) -> Self {
        Self {
            trip_duration_secs: 0,
            trip_realtime_duration_secs: 0,
            interchanges: 0,
            legs,
        }
    }

    /// Overall departure: the first leg's departure.
    pub fn departure_time(&self) -> Option<TripTime> {
        self.legs.first()?.departure_time()
    }

    /// Overall arrival: the last leg's arrival.
    pub fn arrival_time(&self) -> Option<TripTime> {
        self.legs.last()?.arrival_time()
    }

    /// Reported duration, preferring realtime over planned.
    pub fn duration(&self) -> Option<Duration> {
        [self.trip_realtime_duration_secs, self.trip_duration_secs]
            .into_iter()
            .find(|secs| *secs > 0)
            .map(Duration::seconds)
    }

    /// The deduplication key for this journey.
    pub fn key(&self) -> JourneyKey {
        JourneyKey {
            departure: self.departure_time(),
            arrival: self.arrival_time(),
            origin: self.legs.first().map(|l| l.origin.short_name().to_string()),
            destination: self
                .legs
                .last()
                .map(|l| l.destination.short_name().to_string()),
        }
    }
}
