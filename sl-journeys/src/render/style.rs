//! Terminal styling.

use std::io::IsTerminal;

use crate::domain::TransportMode;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

/// ANSI codes for each part of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub route: String,
    pub journey: String,
    pub summary: String,
    pub times: String,
    pub walk: String,
    pub bus: String,
    pub metro: String,
    pub tram: String,
    pub train: String,
    pub ferry: String,
    pub other: String,
}

impl Palette {
    /// Code for legs of the given mode.
    pub fn mode(&self, mode: TransportMode) -> &str {
        match mode {
            TransportMode::Walk => &self.walk,
            TransportMode::Bus => &self.bus,
            TransportMode::Metro => &self.metro,
            TransportMode::Tram => &self.tram,
            TransportMode::Train => &self.train,
            TransportMode::Ferry => &self.ferry,
            TransportMode::Other => &self.other,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            route: format!("{BOLD}{CYAN}"),
            journey: BLUE.to_string(),
            summary: DIM.to_string(),
            times: GREEN.to_string(),
            walk: RED.to_string(),
            bus: YELLOW.to_string(),
            metro: BLUE.to_string(),
            tram: MAGENTA.to_string(),
            train: CYAN.to_string(),
            ferry: GREEN.to_string(),
            other: YELLOW.to_string(),
        }
    }
}

/// How journeys are written out.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Emit ANSI colour codes.
    pub color: bool,
    pub palette: Palette,
}

impl RenderConfig {
    /// Create a config with the default palette.
    pub fn new(color: bool) -> Self {
        Self {
            color,
            palette: Palette::default(),
        }
    }

    /// Colour decided from the environment and whether stdout is a terminal.
    pub fn from_env() -> Self {
        let no_color = std::env::var("NO_COLOR").ok();
        let term = std::env::var("TERM").ok();
        let tty = std::io::stdout().is_terminal();
        Self::new(color_enabled(no_color.as_deref(), term.as_deref(), tty))
    }

    /// Set the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Wrap `text` in `code` when colour is on.
    ///
    /// Empty text and empty codes are passed through untouched.
    pub fn paint(&self, text: &str, code: &str) -> String {
        if !self.color || text.is_empty() || code.is_empty() {
            text.to_string()
        } else {
            format!("{code}{text}{RESET}")
        }
    }
}

/// Whether colour should be used.
///
/// Off when `NO_COLOR` is set to anything non-empty, when `TERM` is
/// `dumb`, or when output is not a terminal.
pub fn color_enabled(no_color: Option<&str>, term: Option<&str>, is_terminal: bool) -> bool {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if term.is_some_and(|t| t.eq_ignore_ascii_case("dumb")) {
        return false;
    }
    is_terminal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_respects_color_flag() {
        let plain = RenderConfig::new(false);
        assert_eq!(plain.paint("08:05", GREEN), "08:05");

        let colored = RenderConfig::new(true);
        assert_eq!(colored.paint("08:05", GREEN), "\x1b[32m08:05\x1b[0m");
    }

    #[test]
    fn paint_skips_empty_text_and_code() {
        let colored = RenderConfig::new(true);
        assert_eq!(colored.paint("", GREEN), "");
        assert_eq!(colored.paint("08:05", ""), "08:05");
    }

    #[test]
    fn default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.route, "\x1b[1m\x1b[36m");
        assert_eq!(palette.mode(TransportMode::Walk), RED);
        assert_eq!(palette.mode(TransportMode::Metro), BLUE);
        assert_eq!(palette.mode(TransportMode::Other), YELLOW);
    }

    #[test]
    fn custom_palette() {
        let palette = Palette {
            metro: "M".into(),
            ..Palette::default()
        };
        let config = RenderConfig::new(true).with_palette(palette);
        assert_eq!(config.palette.mode(TransportMode::Metro), "M");
        assert!(!RenderConfig::default().color);
    }

    #[test]
    fn color_detection() {
        assert!(color_enabled(None, Some("xterm-256color"), true));
        assert!(color_enabled(Some(""), None, true));
        assert!(!color_enabled(Some("1"), Some("xterm"), true));
        assert!(!color_enabled(None, Some("DUMB"), true));
        assert!(!color_enabled(None, Some("xterm"), false));
    }
}
