//! Transport mode classification.
//!
//! The journey planner does not expose a typed mode enumeration, only a
//! human-readable product name such as "Metro", "Bus" or "Footpath". Modes
//! are recovered from the leg label by best-effort text matching; a label
//! that matches nothing is `Other`.

use std::fmt;

/// Coarse transport category of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Walk,
    Bus,
    Metro,
    Tram,
    Train,
    Ferry,
    Other,
}

impl TransportMode {
    /// Classify a leg label.
    ///
    /// ```
    /// use sl_journeys::domain::TransportMode;
    ///
    /// assert_eq!(TransportMode::classify("Footpath"), TransportMode::Walk);
    /// assert_eq!(TransportMode::classify("Metro 17"), TransportMode::Metro);
    /// assert_eq!(TransportMode::classify("Bus 4"), TransportMode::Bus);
    /// assert_eq!(TransportMode::classify("Pendeltåg 41"), TransportMode::Other);
    /// ```
    pub fn classify(label: &str) -> Self {
        let x = label.to_lowercase();
        if x.contains("footpath") || x.contains("walk") {
            TransportMode::Walk
        } else if x.starts_with("bus") {
            TransportMode::Bus
        } else if x.starts_with("metro") || x.contains("tunnelbana") {
            TransportMode::Metro
        } else if x.starts_with("tram") {
            TransportMode::Tram
        } else if x.starts_with("train") || x.contains("commuter") {
            TransportMode::Train
        } else if x.starts_with("ferry") || x.starts_with("ship") {
            TransportMode::Ferry
        } else {
            TransportMode::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Bus => "bus",
            TransportMode::Metro => "metro",
            TransportMode::Tram => "tram",
            TransportMode::Train => "train",
            TransportMode::Ferry => "ferry",
            TransportMode::Other => "other",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
