//! Undirected weighted road network
//!
//! Every road is stored twice, once under each endpoint. Adjacency order is
//! kept exactly as built since it decides depth-first order and tie-breaks.

use crate::error::{Result, RoadnetError};
use crate::graph::types::{Distance, Road};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadNetwork {
    cities: Vec<String>,
    roads: HashMap<String, Vec<Road>>,
}

impl RoadNetwork {
    /// Create a network with the given cities and no roads
    pub fn new<I, S>(cities: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut network = RoadNetwork::default();
        for city in cities {
            let city = city.into();
            if network.roads.contains_key(&city) {
                return Err(RoadnetError::invalid_network(format!(
                    "duplicate city '{}'",
                    city
                )));
            }
            network.roads.insert(city.clone(), Vec::new());
            network.cities.push(city);
        }
        Ok(network)
    }

    /// Build a network from per-city adjacency lists, taken verbatim.
    ///
    /// Every key and every road target must name a listed city. Adjacency
    /// symmetry is not enforced here; see [`RoadNetwork::asymmetric_roads`].
    pub fn from_adjacency<I, S>(cities: I, adjacency: HashMap<String, Vec<Road>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut network = RoadNetwork::new(cities)?;
        for (city, roads) in adjacency {
            crate::ensure_city!(network, &city);
            for road in &roads {
                crate::ensure_city!(network, &road.to);
            }
            network.roads.insert(city, roads);
        }

        let asymmetric = network.asymmetric_roads();
        if !asymmetric.is_empty() {
            tracing::warn!(
                count = asymmetric.len(),
                "network has roads without a matching reverse entry"
            );
        }

        Ok(network)
    }

    /// Add a road in both directions
    pub fn add_road(&mut self, a: &str, b: &str, distance: u64) -> Result<()> {
        crate::ensure_city!(self, a);
        crate::ensure_city!(self, b);
        if a == b {
            return Err(RoadnetError::invalid_network(format!(
                "road from '{}' to itself",
                a
            )));
        }

        self.push_road(a, Road::new(b, distance));
        self.push_road(b, Road::new(a, distance));
        Ok(())
    }

    /// Cities in declaration order
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn contains(&self, city: &str) -> bool {
        self.roads.contains_key(city)
    }

    /// Roads leaving `city`; empty for a city the network does not know
    pub fn roads_from(&self, city: &str) -> &[Road] {
        self.roads.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distance of the first `a -> b` entry, if any
    pub fn distance(&self, a: &str, b: &str) -> Option<Distance> {
        self.roads_from(a)
            .iter()
            .find(|road| road.to == b)
            .map(|road| road.distance)
    }

    /// Total number of adjacency entries (each two-way road counts twice)
    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum()
    }

    /// Adjacency entries `(from, to, distance)` that have no `to -> from`
    /// entry of the same distance
    pub fn asymmetric_roads(&self) -> Vec<(String, String, Distance)> {
        let mut missing = Vec::new();
        for city in &self.cities {
            for road in self.roads_from(city) {
                let mirrored = self
                    .roads_from(&road.to)
                    .iter()
                    .any(|back| back.to == *city && back.distance == road.distance);
                if !mirrored {
                    missing.push((city.clone(), road.to.clone(), road.distance));
                }
            }
        }
        missing
    }

    /// Each undirected road once, in city then adjacency order
    pub fn road_pairs(&self) -> Vec<(&str, &str, Distance)> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut pairs = Vec::new();
        for city in &self.cities {
            for road in self.roads_from(city) {
                let key = if city.as_str() <= road.to.as_str() {
                    (city.as_str(), road.to.as_str())
                } else {
                    (road.to.as_str(), city.as_str())
                };
                if seen.insert(key) {
                    pairs.push((city.as_str(), road.to.as_str(), road.distance));
                }
            }
        }
        pairs
    }

    pub(crate) fn adjacency_mut(&mut self, city: &str) -> Option<&mut Vec<Road>> {
        self.roads.get_mut(city)
    }

    fn push_road(&mut self, city: &str, road: Road) {
        if let Some(roads) = self.roads.get_mut(city) {
            roads.push(road);
        }
    }
}
