//! Network file loading and discovery
//!
//! A network file is a TOML document listing cities, per-city adjacency
//! lists and an optional scenario of road conditions.

pub mod types;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RoadnetError};
use crate::graph::conditions::RoadCondition;
use crate::graph::network::RoadNetwork;
use crate::graph::types::Road;

pub use types::{ConditionEntry, NetworkFile, DEFAULT_TITLE, NETWORK_FORMAT_VERSION};

/// File looked up in the working directory when no path is given
pub const DEFAULT_NETWORK_FILE: &str = "roadnet.toml";

impl NetworkFile {
    /// Load a network file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: NetworkFile = toml::from_str(&content)?;

        if file.version > NETWORK_FORMAT_VERSION {
            return Err(RoadnetError::invalid_network(format!(
                "format version {} is newer than supported version {}",
                file.version, NETWORK_FORMAT_VERSION
            )));
        }

        tracing::debug!(
            cities = file.cities.len(),
            conditions = file.conditions.len(),
            "loaded network file"
        );
        Ok(file)
    }

    /// Capture a network (and optional scenario) as a file description
    pub fn from_network(
        network: &RoadNetwork,
        title: Option<String>,
        conditions: &[RoadCondition],
    ) -> Self {
        let roads = network
            .cities()
            .iter()
            .map(|city| (city.clone(), network.roads_from(city).to_vec()))
            .collect();

        NetworkFile {
            version: NETWORK_FORMAT_VERSION,
            title,
            cities: network.cities().to_vec(),
            roads,
            conditions: conditions.iter().map(ConditionEntry::from).collect(),
        }
    }

    /// Save a network file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadnetError::Other(format!("failed to serialize network: {}", e)))?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved network file");
        Ok(())
    }

    /// Title to show for this network
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Build the in-memory network
    pub fn to_network(&self) -> Result<RoadNetwork> {
        let adjacency: HashMap<String, Vec<Road>> = self
            .roads
            .iter()
            .map(|(city, roads)| (city.clone(), roads.clone()))
            .collect();
        RoadNetwork::from_adjacency(self.cities.iter().cloned(), adjacency)
    }

    /// Validate and return the file's road conditions, in order
    pub fn conditions(&self) -> Result<Vec<RoadCondition>> {
        self.conditions
            .iter()
            .map(RoadCondition::try_from)
            .collect()
    }
}

impl TryFrom<&ConditionEntry> for RoadCondition {
    type Error = RoadnetError;

    fn try_from(entry: &ConditionEntry) -> Result<Self> {
        let source = format!("{} {}", entry.action, entry.between.join(" - "));
        RoadCondition::from_parts(&entry.action, &entry.between, entry.distance, &source)
    }
}

impl From<&RoadCondition> for ConditionEntry {
    fn from(condition: &RoadCondition) -> Self {
        let (action, distance) = match condition {
            RoadCondition::Block(..) => ("block", None),
            RoadCondition::Update(_, _, d) => ("update", Some(d.value())),
            RoadCondition::Add(_, _, d) => ("add", Some(d.value())),
        };
        let (a, b) = condition.cities();
        ConditionEntry {
            action: action.to_string(),
            between: vec![a.to_string(), b.to_string()],
            distance,
        }
    }
}

/// Resolve which network file to use.
///
/// An explicit path wins (it must exist); otherwise `roadnet.toml` in `cwd`.
pub fn discover_network_file(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let candidate = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_NETWORK_FILE),
    };

    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(RoadnetError::NetworkNotFound {
            searched: candidate,
        })
    }
}
