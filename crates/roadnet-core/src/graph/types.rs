use crate::error::RoadnetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Road length, and the accumulated cost of a path of roads
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    pub fn new(distance: u64) -> Self {
        Distance(distance)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Distance {
    fn from(distance: u64) -> Self {
        Distance(distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated length of a route.
///
/// Wider than [`Distance`]: a simple path has fewer roads than `u64::MAX`,
/// so summing `u64` road lengths into a `u128` cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cost(u128);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn new(cost: u128) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

impl std::ops::Add<Distance> for Cost {
    type Output = Self;

    fn add(self, road: Distance) -> Self {
        Cost(self.0 + u128::from(road.0))
    }
}

impl From<Distance> for Cost {
    fn from(distance: Distance) -> Self {
        Cost(u128::from(distance.0))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a city's adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub to: String,
    pub distance: Distance,
}

impl Road {
    pub fn new(to: impl Into<String>, distance: u64) -> Self {
        Road {
            to: to.into(),
            distance: Distance(distance),
        }
    }
}

/// A path through the network and its total distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub cost: Cost,
}

impl Route {
    pub fn new(path: Vec<String>, cost: Cost) -> Self {
        Route { path, cost }
    }

    /// Zero-length route that stays at `city`
    pub fn at(city: &str) -> Self {
        Route {
            path: vec![city.to_string()],
            cost: Cost::ZERO,
        }
    }

    /// Number of cities on the route
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of roads travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consecutive city pairs along the route
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.path.join(" -> "), self.cost)
    }
}

/// Frontier discipline for uninformed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// FIFO frontier
    BreadthFirst,
    /// LIFO frontier
    DepthFirst,
}

impl FromStr for Strategy {
    type Err = RoadnetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            other => Err(RoadnetError::invalid_strategy(other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::DepthFirst => write!(f, "depth-first"),
        }
    }
}
