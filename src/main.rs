//! Roadnet - uninformed path search over road networks
//!
//! Finds point-to-point routes, explores every simple route from a city,
//! and replays road closures and re-weightings before exploring.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::parse::{argv_requests_json, clap_failure};
use cli::{Cli, OutputFormat};
use roadnet_core::error::{ExitCode as RoadnetExitCode, RoadnetError};
use roadnet_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RoadnetExitCode::Success as u8),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Handle a command line clap rejected. With `--format json` the failure
/// becomes a JSON envelope on stderr; otherwise clap prints and exits.
fn parse_failure(err: clap::Error) -> ExitCode {
    if !argv_requests_json(env::args().skip(1)) {
        err.exit();
    }
    match clap_failure(&err) {
        Some(e) => {
            report(&e, OutputFormat::Json, false);
            ExitCode::from(e.exit_code() as u8)
        }
        None => err.exit(),
    }
}

fn report(e: &RoadnetError, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !quiet {
        eprintln!("error: {}", e);
    }
}
