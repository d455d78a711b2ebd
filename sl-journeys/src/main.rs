use std::io::{self, Write};
use std::process::{Command, ExitCode};

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sl_journeys::cli::{Cli, CliError, resolve_route};
use sl_journeys::planner::{CollectConfig, RESULTS_TO_SHOW, TripCollector, TripRequest};
use sl_journeys::render::{RenderConfig, render_journeys};
use sl_journeys::resolve::resolve_stop;
use sl_journeys::route_store::RouteStore;
use sl_journeys::sl::{SlClient, SlConfig};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the itinerary
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = if cli.upgrade {
        run_upgrade()
    } else {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow!("failed to start runtime: {e}"))
            .and_then(|runtime| runtime.block_on(run(cli)))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let route = match resolve_route(&cli.stops, cli.reverse, || {
        RouteStore::in_config_dir()?.load()
    }) {
        Ok(route) => route,
        Err(e @ CliError::WrongArgCount) => {
            eprintln!("{}", Cli::command().render_usage());
            bail!(e);
        }
        Err(e) => bail!(e),
    };

    if cli.save {
        RouteStore::in_config_dir()
            .and_then(|store| store.save(&route))
            .map_err(|e| anyhow!("failed to save default route: {e}"))?;
        println!("Saved default route: {} -> {}\n", route.from, route.to);
    }

    let client = SlClient::new(SlConfig::default())?;

    let from = resolve_stop(&client, &route.from)
        .await
        .map_err(|e| anyhow!("failed to resolve '{}': {e}", route.from))?;
    let to = resolve_stop(&client, &route.to)
        .await
        .map_err(|e| anyhow!("failed to resolve '{}': {e}", route.to))?;

    let config = CollectConfig::default().with_detour_policy(cli.detour_policy.into());
    let request = TripRequest::new(from.id.as_str(), to.id.as_str(), RESULTS_TO_SHOW);
    let journeys = TripCollector::new(&client, &config)
        .collect(&request)
        .await
        .map_err(|e| anyhow!("failed to fetch trips: {e}"))?;

    let mut stdout = io::stdout().lock();
    render_journeys(&mut stdout, &from, &to, &journeys, &RenderConfig::from_env())?;
    stdout.flush()?;
    Ok(())
}

fn run_upgrade() -> Result<()> {
    let status = Command::new("cargo")
        .args(["install", env!("CARGO_PKG_NAME")])
        .status()
        .map_err(|e| anyhow!("upgrade failed: {e}"))?;

    if !status.success() {
        bail!("upgrade failed: cargo install exited with {status}");
    }

    let dumb = std::env::var("TERM").is_ok_and(|t| t.eq_ignore_ascii_case("dumb"));
    if !dumb {
        println!("Upgrade complete");
    }
    Ok(())
}
