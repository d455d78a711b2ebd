//! SL journey planner CLI.
//!
//! Answers "how do I get from here to there, leaving now?" for Stockholm
//! public transport: both ends are resolved to stops, a handful of
//! upcoming itineraries is collected from the journey planner, detours
//! are demoted, and the result is printed as a compact timeline.

pub mod cli;
pub mod domain;
pub mod planner;
pub mod render;
pub mod resolve;
pub mod route_store;
pub mod sl;
