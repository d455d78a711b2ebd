//! Terminal rendering of journeys.
//!
//! Rendering is split in two: journeys are first turned into a
//! [`Timeline`] of plain view models (walk legs compacted, missing times
//! inferred, endpoints named), which is then written with optional ANSI
//! colour.

mod style;
mod timeline;
mod write;

pub use style::{Palette, RenderConfig, color_enabled};
pub use timeline::{
    JourneyView, LegLine, LegWindow, Timeline, compact_walk_legs, leg_window,
};
pub use write::{render_journeys, write_timeline};
