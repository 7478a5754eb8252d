//! Traverse command
use std::time::Instant;

use roadnet_core::error::Result;
use roadnet_core::graph::{
    to_dot, traverse_with_conditions, Cost, RoadCondition, Route, Strategy, Traversal,
};
use serde::Serialize;

use super::helpers::{load_network, parse_conditions, warn_if_unknown};
use crate::cli::{Cli, OutputFormat};

/// Execute the traverse command
pub fn execute(
    cli: &Cli,
    from: &str,
    strategy: &str,
    raw_conditions: &[String],
    ignore_file_conditions: bool,
    start: Instant,
) -> Result<()> {
    let strategy: Strategy = strategy.parse()?;
    let loaded = load_network(cli)?;

    let mut conditions = if ignore_file_conditions {
        Vec::new()
    } else {
        loaded.file.conditions()?
    };
    conditions.extend(parse_conditions(raw_conditions)?);

    let traversal = traverse_with_conditions(&loaded.network, from, strategy, &conditions)?;
    warn_if_unknown(&traversal.network, from);
    tracing::debug!(
        elapsed = ?start.elapsed(),
        conditions = conditions.len(),
        cities = traversal.route.len(),
        "traverse"
    );

    match cli.format {
        OutputFormat::Human => output_human(cli, &traversal),
        OutputFormat::Json => output_json(from, strategy, &conditions, &traversal.route)?,
        OutputFormat::Dot => print!(
            "{}",
            to_dot(
                &traversal.network,
                loaded.title(),
                Some(traversal.route.path.as_slice())
            )
        ),
    }

    Ok(())
}

fn output_human(cli: &Cli, traversal: &Traversal) {
    println!("{}", traversal.route);
    if !cli.quiet {
        println!(
            "Visited {} of {} cities",
            traversal.route.len(),
            traversal.network.cities().len()
        );
    }
}

#[derive(Serialize)]
struct TraverseOutput<'a> {
    start: &'a str,
    strategy: Strategy,
    conditions: Vec<String>,
    path: &'a [String],
    cost: Cost,
    cities: usize,
}

fn output_json(
    from: &str,
    strategy: Strategy,
    conditions: &[RoadCondition],
    route: &Route,
) -> Result<()> {
    let output = TraverseOutput {
        start: from,
        strategy,
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
        path: &route.path,
        cost: route.cost,
        cities: route.len(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
