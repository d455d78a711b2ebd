//! Writing timelines to a terminal or any other sink.

use std::io::{self, Write};

use crate::domain::{Journey, Location};

use super::style::RenderConfig;
use super::timeline::Timeline;

/// Write a built timeline.
///
/// Journeys are separated by a blank line; leg lines are indented by
/// three spaces.
pub fn write_timeline<W: Write>(
    out: &mut W,
    timeline: &Timeline,
    config: &RenderConfig,
) -> io::Result<()> {
    let palette = &config.palette;

    writeln!(out, "{}", config.paint(&timeline.route, &palette.route))?;

    for (idx, journey) in timeline.journeys.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }

        writeln!(
            out,
            "{} {}",
            config.paint(&journey.header(), &palette.journey),
            config.paint(&journey.summary(), &palette.summary)
        )?;

        for leg in &journey.legs {
            writeln!(
                out,
                "   {} {} {} -> {}",
                config.paint(&leg.time_range(), &palette.times),
                config.paint(&leg.label, palette.mode(leg.mode)),
                leg.from,
                leg.to
            )?;
        }
    }

    Ok(())
}

/// Build and write the timeline for `journeys` between two locations.
pub fn render_journeys<W: Write>(
    out: &mut W,
    from: &Location,
    to: &Location,
    journeys: &[Journey],
    config: &RenderConfig,
) -> io::Result<()> {
    write_timeline(out, &Timeline::build(from, to, journeys), config)
}
