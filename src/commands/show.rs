//! Show command
use std::path::Path;
use std::time::Instant;

use roadnet_core::config::NetworkFile;
use roadnet_core::error::Result;
use roadnet_core::graph::{apply_conditions, to_dot, RoadNetwork};

use super::helpers::{load_network, parse_conditions};
use crate::cli::{Cli, OutputFormat};

/// Execute the show command
pub fn execute(
    cli: &Cli,
    raw_conditions: &[String],
    output: Option<&Path>,
    start: Instant,
) -> Result<()> {
    let loaded = load_network(cli)?;
    let conditions = parse_conditions(raw_conditions)?;
    let network = apply_conditions(&loaded.network, &conditions)?;
    tracing::debug!(elapsed = ?start.elapsed(), "show");

    // Conditions are baked into the roads, so the written file carries none.
    let file = NetworkFile::from_network(&network, loaded.file.title.clone(), &[]);

    if let Some(path) = output {
        file.save(path)?;
        if !cli.quiet {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Human => output_human(cli, loaded.title(), &network),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&file)?),
        OutputFormat::Dot => print!("{}", to_dot(&network, loaded.title(), None)),
    }

    Ok(())
}

fn output_human(cli: &Cli, title: &str, network: &RoadNetwork) {
    if !cli.quiet {
        println!("{}", title);
    }
    for city in network.cities() {
        let roads: Vec<String> = network
            .roads_from(city)
            .iter()
            .map(|road| format!("{} ({})", road.to, road.distance))
            .collect();
        if roads.is_empty() {
            println!("{}: (no roads)", city);
        } else {
            println!("{}: {}", city, roads.join(", "));
        }
    }
}
