//! Resolved stop and address locations.

use super::names::place_name;

/// Location types that denote an address rather than a stop.
const ADDRESS_KINDS: [&str; 3] = ["singlehouse", "address", "street"];

/// A candidate match from the stop finder.
///
/// `id` is the identifier the trip search accepts as origin or
/// destination; `kind` is the raw upstream location type ("stop",
/// "singlehouse", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub is_best: bool,
    pub match_quality: i64,
}

impl Location {
    /// Create a stop location with no ranking hints.
    ///
    /// `is_best` is unset and `match_quality` is zero; set them directly
    /// when the candidate came from a ranked response.
    pub fn stop(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: "stop".to_string(),
            is_best: false,
            match_quality: 0,
        }
    }

    /// Whether this location is an address rather than a stop.
    pub fn is_address(&self) -> bool {
        let kind = self.kind.trim().to_lowercase();
        ADDRESS_KINDS.contains(&kind.as_str())
    }

    /// Name for display in headers and at address endpoints.
    pub fn display_name(&self) -> &str {
        place_name(&self.name)
    }
}

/// Pick the single best candidate from a stop-finder response.
///
/// The first candidate flagged `is_best` wins outright. Otherwise the
/// candidate with the highest `match_quality` wins, ties going to the
/// earliest-listed one. Returns `None` only for an empty slice.
///
/// ```
/// use sl_journeys::domain::{Location, pick_best_location};
///
/// let mut a = Location::stop("1", "Slussen");
/// a.match_quality = 900;
/// let mut b = Location::stop("2", "Slussen, Nacka");
/// b.match_quality = 950;
///
/// let candidates = [a, b];
/// assert_eq!(pick_best_location(&candidates).unwrap().id, "2");
/// assert!(pick_best_location(&[]).is_none());
/// ```
pub fn pick_best_location(locations: &[Location]) -> Option<&Location> {
    if let Some(best) = locations.iter().find(|l| l.is_best) {
        return Some(best);
    }

    // `max_by_key` keeps the last maximum, so fold to keep the first.
    locations.iter().fold(None, |best: Option<&Location>, l| match best {
        Some(b) if b.match_quality >= l.match_quality => Some(b),
        _ => Some(l),
    })
}
