//! Helper functions shared across commands

use std::env;
use std::time::Instant;

use roadnet_core::config::{discover_network_file, NetworkFile};
use roadnet_core::error::Result;
use roadnet_core::graph::{RoadCondition, RoadNetwork, RoadProvider};
use roadnet_core::trace_time;

use crate::cli::Cli;

/// A network file together with the network built from it
pub struct LoadedNetwork {
    pub file: NetworkFile,
    pub network: RoadNetwork,
}

impl LoadedNetwork {
    pub fn title(&self) -> &str {
        self.file.title()
    }
}

/// Locate, read and build the network named by `--network` (or the default file)
pub fn load_network(cli: &Cli) -> Result<LoadedNetwork> {
    let start = Instant::now();
    let cwd = env::current_dir()?;
    let path = discover_network_file(cli.network.as_deref(), &cwd)?;

    let file = NetworkFile::load(&path)?;
    let network = file.to_network()?;
    trace_time!(start, "load_network", cities = network.cities().len());

    Ok(LoadedNetwork { file, network })
}

/// Parse `--condition` values in the order given
pub fn parse_conditions(raw: &[String]) -> Result<Vec<RoadCondition>> {
    raw.iter().map(|c| c.parse::<RoadCondition>()).collect()
}

/// Searches treat unknown cities as dead ends; say so in the log
pub fn warn_if_unknown(provider: &dyn RoadProvider, city: &str) {
    if !provider.has_city(city) {
        tracing::warn!(city = %city, "city is not in the network");
    }
}
