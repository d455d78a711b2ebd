//! Detour filtering.
//!
//! The trip search sometimes proposes walking to a metro station, riding
//! one or two stops, and walking on, when simply walking would be about
//! as fast. These "tiny metro hops" are demoted so that cleaner
//! itineraries are shown first. Filtering only reorders and trims: a
//! non-empty candidate list never comes back empty.

use chrono::Duration;

use crate::domain::{Journey, Leg, TripTime, names_match};

/// Longest metro ride that still counts as a tiny hop (minutes, inclusive).
const TINY_HOP_MAX_MINS: i64 = 3;

/// How much earlier than the metro departure an alternative walk may leave.
const WALK_DEPARTURE_SLACK_MINS: i64 = 10;

/// How much later than the hop's arrival an alternative walk may arrive.
const WALK_ARRIVAL_SLACK_MINS: i64 = 5;

/// How aggressively tiny metro hops are filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetourPolicy {
    /// Demote every journey containing a tiny hop behind the clean ones.
    /// A metro ride that departs and arrives in the same minute counts.
    Lenient,
    /// Demote a tiny-hop journey only when another candidate walks the
    /// same stretch directly in a comparable time window.
    #[default]
    Strict,
}

/// A walk, tiny metro ride, walk sequence inside one journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TinyHopSegment {
    /// Short name where the first walk starts.
    pub from: String,
    /// Short name where the second walk ends.
    pub to: String,
    /// Metro leg departure.
    pub departure: Option<TripTime>,
    /// Second walk arrival.
    pub arrival: Option<TripTime>,
}

fn is_tiny_ride(leg: &Leg) -> bool {
    match leg.duration() {
        Some(d) => d >= Duration::zero() && d <= Duration::minutes(TINY_HOP_MAX_MINS),
        // Incomplete timing counts as tiny
        None => true,
    }
}

/// Every tiny metro hop in `journey`, in leg order.
pub fn tiny_hop_segments(journey: &Journey) -> Vec<TinyHopSegment> {
    journey
        .legs
        .windows(3)
        .filter_map(|window| {
            let [before, ride, after] = window else {
                return None;
            };

            if !(before.is_walk() && ride.is_metro() && after.is_walk()) || !is_tiny_ride(ride) {
                return None;
            }

            Some(TinyHopSegment {
                from: before.origin.short_name().to_string(),
                to: after.destination.short_name().to_string(),
                departure: ride.departure_time(),
                arrival: after.arrival_time(),
            })
        })
        .collect()
}

/// Whether `journey` contains at least one tiny metro hop.
pub fn has_tiny_metro_hop(journey: &Journey) -> bool {
    !tiny_hop_segments(journey).is_empty()
}

/// Whether any journey other than `journeys[skip]` walks `segment` directly.
///
/// The walk must connect the same two stops (names compared
/// case-insensitively), leave no more than 10 minutes before the metro
/// departs and arrive no more than 5 minutes after the hop would. A bound
/// is ignored when either time is unknown.
pub fn has_direct_walk_alternative(
    journeys: &[Journey],
    skip: usize,
    segment: &TinyHopSegment,
) -> bool {
    let earliest = segment
        .departure
        .map(|t| t - Duration::minutes(WALK_DEPARTURE_SLACK_MINS));
    let latest = segment
        .arrival
        .map(|t| t + Duration::minutes(WALK_ARRIVAL_SLACK_MINS));

    journeys
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != skip)
        .flat_map(|(_, journey)| journey.legs.iter())
        .filter(|leg| leg.is_walk())
        .any(|leg| {
            if !names_match(leg.origin.short_name(), &segment.from)
                || !names_match(leg.destination.short_name(), &segment.to)
            {
                return false;
            }

            let leaves_too_early = match (earliest, leg.departure_time()) {
                (Some(earliest), Some(dep)) => dep < earliest,
                _ => false,
            };
            let arrives_too_late = match (latest, leg.arrival_time()) {
                (Some(latest), Some(arr)) => arr > latest,
                _ => false,
            };

            !leaves_too_early && !arrives_too_late
        })
}

/// Demote detour journeys according to `policy`.
///
/// Never grows the list and never empties a non-empty one. `desired` is
/// the count the caller will eventually show; demoted journeys are only
/// used to top up towards it.
pub fn filter_detours(
    journeys: Vec<Journey>,
    desired: usize,
    policy: DetourPolicy,
) -> Vec<Journey> {
    if journeys.len() <= 1 {
        return journeys;
    }

    let demote: Vec<bool> = match policy {
        DetourPolicy::Lenient => journeys.iter().map(has_tiny_metro_hop).collect(),
        DetourPolicy::Strict => journeys
            .iter()
            .enumerate()
            .map(|(idx, journey)| {
                tiny_hop_segments(journey)
                    .iter()
                    .any(|segment| has_direct_walk_alternative(&journeys, idx, segment))
            })
            .collect(),
    };

    let demoted = demote.iter().filter(|d| **d).count();
    if demoted == 0 || demoted == journeys.len() {
        return journeys;
    }

    tracing::debug!(?policy, demoted, total = journeys.len(), "demoting detours");

    let (kept, fallback): (Vec<_>, Vec<_>) = journeys
        .into_iter()
        .zip(demote)
        .partition(|(_, demote)| !demote);

    let mut result: Vec<Journey> = kept.into_iter().map(|(j, _)| j).collect();
    let needed = desired.saturating_sub(result.len());
    result.extend(fallback.into_iter().map(|(j, _)| j).take(needed));
    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::fixtures::{bus, journey, metro, mins, walk};
    use proptest::prelude::*;

    const STOPS: [&str; 4] = ["A", "B", "C", "D"];

    /// One leg: (kind, from, to, departure minute, ride minutes, timed).
    fn leg_strategy() -> impl Strategy<Value = Leg> {
        (0u8..3, 0usize..4, 0usize..4, 480i64..540, 0i64..8, any::<bool>()).prop_map(
            |(kind, from, to, dep, ride, timed)| {
                let (dep, arr) = if timed {
                    (Some(mins(dep)), Some(mins(dep + ride)))
                } else {
                    (None, None)
                };
                let (from, to) = (STOPS[from], STOPS[to]);
                match kind {
                    0 => walk(from, to, dep, arr),
                    1 => metro(from, to, dep, arr),
                    _ => bus(from, to, dep, arr),
                }
            },
        )
    }

    /// Journeys tagged with their input position in `interchanges`.
    fn journeys_strategy() -> impl Strategy<Value = Vec<Journey>> {
        prop::collection::vec(prop::collection::vec(leg_strategy(), 1..6), 0..8).prop_map(
            |legs| {
                legs.into_iter()
                    .enumerate()
                    .map(|(idx, legs)| {
                        let mut j = journey(legs);
                        j.interchanges = idx as u32;
                        j
                    })
                    .collect()
            },
        )
    }

    fn policy_strategy() -> impl Strategy<Value = DetourPolicy> {
        prop_oneof![Just(DetourPolicy::Lenient), Just(DetourPolicy::Strict)]
    }

    proptest! {
        #[test]
        fn size_bounds(journeys in journeys_strategy(), desired in 1usize..10, policy in policy_strategy()) {
            let len = journeys.len();
            let filtered = filter_detours(journeys, desired, policy);

            prop_assert!(filtered.len() <= len);
            prop_assert!(filtered.len() >= desired.min(len));
            if len > 0 {
                prop_assert!(!filtered.is_empty());
            }
        }

        #[test]
        fn output_is_drawn_from_input(journeys in journeys_strategy(), desired in 1usize..10, policy in policy_strategy()) {
            let filtered = filter_detours(journeys.clone(), desired, policy);

            let mut tags: Vec<u32> = filtered.iter().map(|j| j.interchanges).collect();
            for j in &filtered {
                prop_assert_eq!(j, &journeys[j.interchanges as usize]);
            }
            tags.sort_unstable();
            tags.dedup();
            prop_assert_eq!(tags.len(), filtered.len());
        }

        #[test]
        fn lenient_only_drops_tiny_hops(journeys in journeys_strategy(), desired in 1usize..10) {
            let filtered = filter_detours(journeys.clone(), desired, DetourPolicy::Lenient);

            for (idx, j) in journeys.iter().enumerate() {
                if !filtered.iter().any(|f| f.interchanges == idx as u32) {
                    prop_assert!(has_tiny_metro_hop(j));
                }
            }
        }

        #[test]
        fn strict_only_drops_with_walk_alternative(journeys in journeys_strategy(), desired in 1usize..10) {
            let filtered = filter_detours(journeys.clone(), desired, DetourPolicy::Strict);

            for (idx, j) in journeys.iter().enumerate() {
                if !filtered.iter().any(|f| f.interchanges == idx as u32) {
                    let qualifies = tiny_hop_segments(j)
                        .iter()
                        .any(|s| has_direct_walk_alternative(&journeys, idx, s));
                    prop_assert!(qualifies, "journey {} dropped without alternative", idx);
                }
            }
        }
    }
}
