//! Path command
use std::time::Instant;

use roadnet_core::error::Result;
use roadnet_core::graph::{find_path_by_name, to_dot, Cost, Route};
use serde::Serialize;

use super::helpers::{load_network, warn_if_unknown};
use crate::cli::{Cli, OutputFormat};

/// Execute the path command
pub fn execute(cli: &Cli, from: &str, to: &str, strategy: &str, start: Instant) -> Result<()> {
    let loaded = load_network(cli)?;
    warn_if_unknown(&loaded.network, from);
    warn_if_unknown(&loaded.network, to);

    let route = find_path_by_name(&loaded.network, from, to, strategy);
    tracing::debug!(elapsed = ?start.elapsed(), found = route.is_some(), "path_search");

    match cli.format {
        OutputFormat::Human => output_human(cli, from, to, route.as_ref()),
        OutputFormat::Json => output_json(from, to, strategy, route.as_ref())?,
        OutputFormat::Dot => print!(
            "{}",
            to_dot(
                &loaded.network,
                loaded.title(),
                route.as_ref().map(|r| r.path.as_slice())
            )
        ),
    }

    Ok(())
}

fn output_human(cli: &Cli, from: &str, to: &str, route: Option<&Route>) {
    match route {
        Some(route) => {
            println!("{}", route);
            if !cli.quiet {
                let hops = route.hops();
                println!("Path length: {} hop{}", hops, if hops == 1 { "" } else { "s" });
            }
        }
        None => {
            if !cli.quiet {
                println!("No path found from {} to {}", from, to);
            }
        }
    }
}

#[derive(Serialize)]
struct PathOutput<'a> {
    from: &'a str,
    to: &'a str,
    strategy: &'a str,
    found: bool,
    path: Option<&'a [String]>,
    cost: Option<Cost>,
    path_length: Option<usize>,
}

fn output_json(from: &str, to: &str, strategy: &str, route: Option<&Route>) -> Result<()> {
    let output = PathOutput {
        from,
        to,
        strategy,
        found: route.is_some(),
        path: route.map(|r| r.path.as_slice()),
        cost: route.map(|r| r.cost),
        path_length: route.map(Route::hops),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
