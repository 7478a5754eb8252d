//! Network file type definitions

use crate::graph::types::Road;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current network file format version
pub const NETWORK_FORMAT_VERSION: u32 = 1;

/// Default title used when the file does not name its network
pub const DEFAULT_TITLE: &str = "Road Network";

/// On-disk description of a road network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Human-readable network name, used as the rendered graph title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Cities in display order
    pub cities: Vec<String>,

    /// Adjacency lists keyed by city; order within each list is kept
    #[serde(default)]
    pub roads: BTreeMap<String, Vec<Road>>,

    /// Road conditions applied before exhaustive traversal
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionEntry>,
}

/// A road condition as written in a network file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEntry {
    /// `block`, `update` or `add`
    pub action: String,

    /// The two cities the road joins
    pub between: Vec<String>,

    /// New or added road length (`update` and `add` only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
}

fn default_version() -> u32 {
    NETWORK_FORMAT_VERSION
}
