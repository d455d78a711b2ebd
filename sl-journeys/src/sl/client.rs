//! SL journey planner HTTP client.
//!
//! Two endpoints are used: the stop finder, which turns free text into
//! candidate locations, and the trip search, which returns a small batch
//! of itineraries departing at or after a given time.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::domain::{Journey, Location, TripTime};

use super::convert::{convert_location, convert_trips};
use super::error::SlError;
use super::types::{StopFinderResponse, TripsResponse};

/// Default base URL for the journey planner API.
const DEFAULT_BASE_URL: &str = "https://journeyplanner.integration.sl.se/v2";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Object filter for the stop finder: stops, streets, addresses and POIs.
const ANY_OBJ_FILTER: &str = "46";

/// Maximum number of body bytes quoted in a status error.
const MAX_ERROR_BODY: usize = 2048;

/// Configuration for the journey planner client.
#[derive(Debug, Clone)]
pub struct SlConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds, applied to every call
    pub timeout_secs: u64,
}

impl SlConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for SlConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for one trip-search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    /// Origin location id, as returned by the stop finder.
    pub from_id: String,
    /// Destination location id.
    pub to_id: String,
    /// Earliest departure.
    pub departure: TripTime,
    /// Number of itineraries to request.
    pub trips: usize,
}

impl TripQuery {
    /// Query parameters for the trips endpoint.
    ///
    /// Date and time of day are sent separately, as `YYYYMMDD` and `HHMM`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type_origin", "any".to_string()),
            ("type_destination", "any".to_string()),
            ("name_origin", self.from_id.clone()),
            ("name_destination", self.to_id.clone()),
            ("calc_number_of_trips", self.trips.to_string()),
            ("language", "en".to_string()),
            ("calc_one_direction", "true".to_string()),
            ("itd_trip_date_time_dep_arr", "dep".to_string()),
            ("itd_date", self.departure.format("%Y%m%d").to_string()),
            ("itd_time", self.departure.format("%H%M").to_string()),
        ]
    }
}

/// Query parameters for the stop-finder endpoint.
pub fn stop_finder_params(search: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name_sf", search.to_string()),
        ("any_obj_filter_sf", ANY_OBJ_FILTER.to_string()),
        ("type_sf", "any".to_string()),
    ]
}

/// SL journey planner API client.
#[derive(Debug, Clone)]
pub struct SlClient {
    http: reqwest::Client,
    base_url: String,
}

impl SlClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SlConfig) -> Result<Self, SlError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for stops and addresses matching free text.
    ///
    /// Candidates are returned in upstream order.
    pub async fn find_stops(&self, search: &str) -> Result<Vec<Location>, SlError> {
        let url = format!("{}/stop-finder", self.base_url);
        let response: StopFinderResponse = self.get_json(&url, &stop_finder_params(search)).await?;

        Ok(response
            .locations
            .into_iter()
            .map(convert_location)
            .collect())
    }

    /// Fetch one batch of itineraries.
    ///
    /// An empty batch means the service has nothing for this window. It is
    /// only an error when the service also reports error messages.
    pub async fn find_trips(&self, query: &TripQuery) -> Result<Vec<Journey>, SlError> {
        let url = format!("{}/trips", self.base_url);
        let response: TripsResponse = self.get_json(&url, &query.params()).await?;
        convert_trips(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, SlError> {
        tracing::debug!(url, ?params, "GET");

        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| SlError::Json {
            message: e.to_string(),
        })
    }
}

/// Build a status error, quoting at most `MAX_ERROR_BODY` bytes of the body.
fn status_error(status: StatusCode, body: &str) -> SlError {
    let mut end = body.len().min(MAX_ERROR_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    SlError::Status {
        status: status.as_u16(),
        body: body[..end].trim().to_string(),
    }
}
