//! Shared builders for tests.

use chrono::{Duration, Local, TimeZone};

use super::{Journey, JourneyPoint, Leg, TripTime, Transport};

/// 2024-03-15 at `h:m` local time.
pub fn at(h: u32, m: u32) -> TripTime {
    Local.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
}

/// 2024-03-15 at `h:m:s` local time.
pub fn at_s(h: u32, m: u32, s: u32) -> TripTime {
    Local.with_ymd_and_hms(2024, 3, 15, h, m, s).unwrap()
}

/// Minutes after 2024-03-15 00:00 local time.
pub fn mins(n: i64) -> TripTime {
    at(0, 0) + Duration::minutes(n)
}

/// A leg with planned times only.
pub fn leg(
    product: &str,
    from: &str,
    to: &str,
    dep: Option<TripTime>,
    arr: Option<TripTime>,
) -> Leg {
    let mut origin = JourneyPoint::named(from);
    origin.planned_departure = dep;
    let mut destination = JourneyPoint::named(to);
    destination.planned_arrival = arr;
    Leg::new(origin, destination, Transport::new(product, ""))
}

pub fn walk(from: &str, to: &str, dep: Option<TripTime>, arr: Option<TripTime>) -> Leg {
    leg("Footpath", from, to, dep, arr)
}

pub fn metro(from: &str, to: &str, dep: Option<TripTime>, arr: Option<TripTime>) -> Leg {
    let mut l = leg("Metro", from, to, dep, arr);
    l.transport.disassembled_name = "17".to_string();
    l
}

pub fn bus(from: &str, to: &str, dep: Option<TripTime>, arr: Option<TripTime>) -> Leg {
    let mut l = leg("Bus", from, to, dep, arr);
    l.transport.disassembled_name = "4".to_string();
    l
}

pub fn journey(legs: Vec<Leg>) -> Journey {
    Journey::from_legs(legs)
}

/// A single-bus journey A -> B departing at `dep`, taking 20 minutes.
pub fn direct(dep: TripTime) -> Journey {
    journey(vec![bus("A", "B", Some(dep), Some(dep + Duration::minutes(20)))])
}
