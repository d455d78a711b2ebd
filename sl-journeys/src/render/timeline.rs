//! Timeline view models.
//!
//! Journeys are turned into plain view models before anything is written,
//! so the time inference and naming rules can be checked without ANSI
//! codes getting in the way.

use chrono::Duration;

use crate::domain::{
    Journey, Leg, Location, TransportMode, TripTime, floor_to_minute, format_duration,
    format_hhmm, names_match,
};

/// Merge runs of consecutive walk legs into one.
///
/// A merged walk keeps the first leg's origin and transport and takes the
/// last leg's destination.
pub fn compact_walk_legs(legs: &[Leg]) -> Vec<Leg> {
    let mut out: Vec<Leg> = Vec::with_capacity(legs.len());

    for leg in legs {
        match out.last_mut() {
            Some(prev) if prev.is_walk() && leg.is_walk() => {
                prev.destination = leg.destination.clone();
            }
            _ => out.push(leg.clone()),
        }
    }

    out
}

/// Departure and arrival shown for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegWindow {
    pub departure: Option<TripTime>,
    pub arrival: Option<TripTime>,
}

impl LegWindow {
    /// Where the next leg may start from.
    pub fn end(&self) -> Option<TripTime> {
        self.arrival.or(self.departure)
    }
}

/// Infer a displayable time window for `leg`.
///
/// `prev_end` is the end of the previously processed leg. A departure is
/// never shown before it, an arrival never before its departure, and a
/// leg that takes a fraction of a minute is shown as taking one.
pub fn leg_window(leg: &Leg, prev_end: Option<TripTime>) -> LegWindow {
    let mut departure = leg.departure_time();
    let mut arrival = leg.arrival_time();

    if let Some(prev) = prev_end {
        departure = Some(departure.map_or(prev, |dep| dep.max(prev)));
    }

    if arrival.is_none() {
        arrival = departure;
    }

    if let (Some(dep), Some(arr)) = (departure, arrival) {
        if arr < dep {
            arrival = Some(dep);
        } else if arr > dep && floor_to_minute(arr) == floor_to_minute(dep) {
            // 08:05:10 -> 08:05:50 would otherwise read 08:05 -> 08:05
            arrival = Some(floor_to_minute(arr) + Duration::minutes(1));
        }
    }

    LegWindow { departure, arrival }
}

/// One printed leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegLine {
    pub window: LegWindow,
    pub label: String,
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
}

impl LegLine {
    /// `HH:MM -> HH:MM`, with `--:--` for unknown times.
    pub fn time_range(&self) -> String {
        format!(
            "{} -> {}",
            format_hhmm(self.window.departure),
            format_hhmm(self.window.arrival)
        )
    }
}

/// One printed journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyView {
    /// 1-based position in the list.
    pub number: usize,
    pub departure: Option<TripTime>,
    pub arrival: Option<TripTime>,
    pub duration: String,
    pub changes: u32,
    pub legs: Vec<LegLine>,
}

impl JourneyView {
    /// Build the view for `journey`, numbered `number`.
    ///
    /// Address endpoints are named after the resolved locations rather
    /// than the stop names in the legs.
    pub fn from_journey(number: usize, journey: &Journey, from: &Location, to: &Location) -> Self {
        let legs = compact_walk_legs(&journey.legs);
        let last = legs.len().saturating_sub(1);

        let mut lines = Vec::with_capacity(legs.len());
        let mut prev_end = None;

        for (idx, leg) in legs.iter().enumerate() {
            let window = leg_window(leg, prev_end);
            if window.end().is_some() {
                prev_end = window.end();
            }

            let from_name = if idx == 0 && from.is_address() {
                from.display_name()
            } else {
                leg.origin.short_name()
            };
            let to_name = if idx == last && to.is_address() {
                to.display_name()
            } else {
                leg.destination.short_name()
            };

            // Walking nowhere: keep the timing, skip the line
            if leg.is_walk() && names_match(from_name, to_name) {
                continue;
            }

            lines.push(LegLine {
                window,
                label: leg.label(),
                mode: leg.mode(),
                from: from_name.to_string(),
                to: to_name.to_string(),
            });
        }

        Self {
            number,
            departure: journey.departure_time(),
            arrival: journey.arrival_time(),
            duration: journey
                .duration()
                .map_or_else(|| "unknown duration".to_string(), format_duration),
            changes: journey.interchanges,
            legs: lines,
        }
    }

    /// `N. HH:MM -> HH:MM`
    pub fn header(&self) -> String {
        format!(
            "{}. {} -> {}",
            self.number,
            format_hhmm(self.departure),
            format_hhmm(self.arrival)
        )
    }

    /// `(duration, K change|changes)`
    pub fn summary(&self) -> String {
        let word = if self.changes == 1 { "change" } else { "changes" };
        format!("({}, {} {})", self.duration, self.changes, word)
    }
}

/// Everything printed for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// `from -> to` header.
    pub route: String,
    pub journeys: Vec<JourneyView>,
}

impl Timeline {
    pub fn build(from: &Location, to: &Location, journeys: &[Journey]) -> Self {
        Self {
            route: format!("{} -> {}", from.display_name(), to.display_name()),
            journeys: journeys
                .iter()
                .enumerate()
                .map(|(idx, journey)| JourneyView::from_journey(idx + 1, journey, from, to))
                .collect(),
        }
    }
}
