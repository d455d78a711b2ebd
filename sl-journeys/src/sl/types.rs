//! Journey planner response DTOs.
//!
//! These types map directly to the stop-finder and trips JSON responses.
//! Every field defaults, because the service omits fields freely
//! (walking legs have no line number, unrealtime stops have no estimated
//! times, and so on).

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response from the stop-finder endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StopFinderResponse {
    #[serde(deserialize_with = "nullable")]
    pub locations: Vec<LocationDto>,

    #[serde(rename = "systemMessages")]
    #[serde(deserialize_with = "nullable")]
    pub messages: Vec<SystemMessage>,
}

/// A candidate stop or address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationDto {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    /// Location type: "stop", "singlehouse", "street", "poi", ...
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub kind: String,

    #[serde(deserialize_with = "nullable")]
    pub is_best: bool,
    #[serde(deserialize_with = "nullable")]
    pub match_quality: i64,
}

/// Response from the trips endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripsResponse {
    #[serde(deserialize_with = "nullable")]
    pub journeys: Vec<JourneyDto>,

    #[serde(rename = "systemMessages")]
    #[serde(deserialize_with = "nullable")]
    pub messages: Vec<SystemMessage>,
}

/// One itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JourneyDto {
    /// Planned duration in seconds.
    #[serde(deserialize_with = "nullable")]
    pub trip_duration: i64,

    /// Realtime duration in seconds.
    #[serde(deserialize_with = "nullable")]
    pub trip_rt_duration: i64,

    #[serde(deserialize_with = "nullable")]
    pub interchanges: u32,
    #[serde(deserialize_with = "nullable")]
    pub legs: Vec<LegDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegDto {
    #[serde(deserialize_with = "nullable")]
    pub origin: PointDto,
    #[serde(deserialize_with = "nullable")]
    pub destination: PointDto,
    #[serde(deserialize_with = "nullable")]
    pub transportation: TransportationDto,
}

/// Origin or destination of a leg. Times are RFC 3339 strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointDto {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub departure_time_planned: Option<String>,
    pub departure_time_estimated: Option<String>,
    pub arrival_time_planned: Option<String>,
    pub arrival_time_estimated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportationDto {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub number: String,
    #[serde(deserialize_with = "nullable")]
    pub disassembled_name: String,
    #[serde(deserialize_with = "nullable")]
    pub product: ProductDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductDto {
    /// Mode name, e.g. "Metro", "Bus", "Footpath".
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// A condition reported by the service alongside (or instead of) results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemMessage {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

impl SystemMessage {
    /// Whether this message reports an error with actual text.
    pub fn is_error(&self) -> bool {
        self.kind.eq_ignore_ascii_case("error") && !self.text.trim().is_empty()
    }
}
