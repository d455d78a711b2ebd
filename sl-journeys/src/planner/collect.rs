//! Trip collection.
//!
//! The trip search answers "a few itineraries departing at or after T",
//! so enough candidates are gathered by paging a departure-time cursor
//! forward, dropping departures already in the past and journeys seen in
//! an earlier batch.

use std::collections::HashSet;

use chrono::Local;
use tracing::{debug, trace, warn};

use crate::domain::{Journey, JourneyKey, TripTime};
use crate::sl::{SlClient, SlError, TripQuery};

use super::config::CollectConfig;
use super::detour::filter_detours;

/// Error from trip collection.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// Every batch was empty or stale
    #[error("no journeys found")]
    NoResults,

    /// The first trip search failed
    #[error(transparent)]
    Upstream(#[from] SlError),
}

/// Trait for fetching batches of itineraries.
///
/// This abstraction allows the collector to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait TripProvider {
    /// Itineraries departing at or after `query.departure`.
    async fn fetch_trips(&self, query: &TripQuery) -> Result<Vec<Journey>, SlError>;
}

impl TripProvider for SlClient {
    async fn fetch_trips(&self, query: &TripQuery) -> Result<Vec<Journey>, SlError> {
        self.find_trips(query).await
    }
}

/// Request for trip collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Resolved origin id.
    pub from_id: String,
    /// Resolved destination id.
    pub to_id: String,
    /// Number of journeys wanted. Zero is treated as one.
    pub desired: usize,
}

impl TripRequest {
    /// Create a new trip request.
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>, desired: usize) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            desired,
        }
    }

    fn desired(&self) -> usize {
        self.desired.max(1)
    }
}

/// Next cursor position after a batch whose latest departure was `latest`.
///
/// Moves just past the latest departure, or by the stall step when the
/// batch brought nothing later than the cursor. Never moves backwards.
pub fn next_cursor(cursor: TripTime, latest: TripTime, config: &CollectConfig) -> TripTime {
    if latest > cursor {
        latest + config.cursor_step()
    } else {
        cursor + config.stall_step()
    }
}

fn leg_modes(journey: &Journey) -> String {
    journey
        .legs
        .iter()
        .map(|leg| leg.mode().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Pages through trip search results.
pub struct TripCollector<'a, P: TripProvider> {
    provider: &'a P,
    config: &'a CollectConfig,
}

impl<'a, P: TripProvider> TripCollector<'a, P> {
    /// Create a new collector.
    pub fn new(provider: &'a P, config: &'a CollectConfig) -> Self {
        Self { provider, config }
    }

    /// Collect journeys departing from now on.
    pub async fn collect(&self, request: &TripRequest) -> Result<Vec<Journey>, CollectError> {
        self.collect_at(request, Local::now()).await
    }

    /// Collect journeys departing from `now` on.
    ///
    /// Candidates are filtered for detours and truncated to the desired
    /// count.
    pub async fn collect_at(
        &self,
        request: &TripRequest,
        now: TripTime,
    ) -> Result<Vec<Journey>, CollectError> {
        let candidates = self.gather_at(request, now).await?;
        if candidates.is_empty() {
            return Err(CollectError::NoResults);
        }

        let desired = request.desired();
        let mut journeys = filter_detours(candidates, desired, self.config.detour_policy);
        journeys.truncate(desired);
        Ok(journeys)
    }

    /// Gather unique, non-stale candidates without filtering.
    ///
    /// Stops once enough candidates are collected, a batch comes back
    /// empty, or the attempt budget runs out. A failure after something
    /// was collected ends the search with what there is.
    pub async fn gather_at(
        &self,
        request: &TripRequest,
        now: TripTime,
    ) -> Result<Vec<Journey>, CollectError> {
        let cap = CollectConfig::max_candidates(request.desired);
        let stale_before = now - self.config.stale_grace();

        let mut seen: HashSet<JourneyKey> = HashSet::new();
        let mut collected: Vec<Journey> = Vec::with_capacity(cap.min(self.config.max_collected()));
        let mut cursor = now;

        for attempt in 0..self.config.max_attempts {
            if collected.len() >= cap {
                break;
            }

            let query = TripQuery {
                from_id: request.from_id.clone(),
                to_id: request.to_id.clone(),
                departure: cursor,
                trips: self.config.batch_size,
            };
            debug!(attempt, cursor = %cursor.format("%Y-%m-%d %H:%M"), "fetching trips");

            let batch = match self.provider.fetch_trips(&query).await {
                Ok(batch) => batch,
                Err(e) if collected.is_empty() => return Err(e.into()),
                Err(e) => {
                    warn!(
                        attempt,
                        collected = collected.len(),
                        service = e.is_service_message(),
                        "trip search failed, keeping partial results: {e}"
                    );
                    break;
                }
            };

            if batch.is_empty() {
                debug!(attempt, "empty batch, stopping");
                break;
            }

            let mut latest = cursor;
            for journey in batch {
                if let Some(dep) = journey.departure_time() {
                    latest = latest.max(dep);
                    if dep < stale_before {
                        trace!(departure = %dep, "skipping departed journey");
                        continue;
                    }
                }

                if !seen.insert(journey.key()) {
                    trace!("skipping duplicate journey");
                    continue;
                }

                trace!(
                    departure = ?journey.departure_time(),
                    modes = %leg_modes(&journey),
                    "collected journey"
                );
                collected.push(journey);
                if collected.len() >= cap {
                    break;
                }
            }

            cursor = next_cursor(cursor, latest, self.config);
        }

        debug!(collected = collected.len(), cap, "trip collection finished");
        Ok(collected)
    }
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
