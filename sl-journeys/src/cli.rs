//! Command-line arguments.

use clap::{Parser, ValueEnum};

use crate::planner::DetourPolicy;
use crate::route_store::{RouteStoreError, SavedRoute};

const USAGE: &str = "\
sl <from> <to>
       sl -s <from> <to>
       sl <from> <to> -s
       sl
       sl -r
       sl -u | --upgrade
       sl -h | --help";

const AFTER_HELP: &str = "\
When a route is saved, you can run `sl` without arguments.
Flags can be placed before or after route arguments.";

/// Fetches upcoming SL journey alternatives.
#[derive(Debug, Parser)]
#[command(name = "sl", version, long_about = None)]
#[command(override_usage = USAGE)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Save the provided route as your default (for plain `sl`)
    #[arg(short = 's')]
    pub save: bool,

    /// Reverse from/to (works with saved route or provided args)
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Upgrades the CLI tool
    #[arg(short = 'u', long = "upgrade")]
    pub upgrade: bool,

    /// How itineraries with a short metro hop between two walks are demoted
    #[arg(long, value_enum, default_value_t = PolicyArg::Strict)]
    pub detour_policy: PolicyArg,

    /// Origin and destination
    #[arg(value_name = "STOP")]
    pub stops: Vec<String>,
}

/// Command-line spelling of [`DetourPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Demote every short metro hop
    Lenient,
    /// Demote a short metro hop only when walking the same stretch is offered
    Strict,
}

impl From<PolicyArg> for DetourPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Lenient => DetourPolicy::Lenient,
            PolicyArg::Strict => DetourPolicy::Strict,
        }
    }
}

/// Error from working out which route to search.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("expected either no arguments or exactly two: <from> <to>")]
    WrongArgCount,

    #[error(transparent)]
    Store(#[from] RouteStoreError),
}

/// Pick the route to search.
///
/// Two stop arguments are used as given; none means the saved route,
/// fetched with `load`. Any other count is an error. `reverse` swaps the
/// ends either way.
pub fn resolve_route<F>(stops: &[String], reverse: bool, load: F) -> Result<SavedRoute, CliError>
where
    F: FnOnce() -> Result<SavedRoute, RouteStoreError>,
{
    let route = match stops {
        [] => load()?,
        [from, to] => SavedRoute::new(from.as_str(), to.as_str()),
        _ => return Err(CliError::WrongArgCount),
    };

    Ok(if reverse { route.reversed() } else { route })
}
