//! Road-condition edits applied to a copy of a network
//!
//! Conditions are folded strictly in order; each one sees the effects of the
//! ones before it. Every edit touches both endpoints so the network stays
//! symmetric.

use crate::error::Result;
use crate::graph::explore::traverse_all;
use crate::graph::network::RoadNetwork;
use crate::graph::types::{Distance, Road, Route, Strategy};
use std::fmt;
use std::str::FromStr;

/// A single edit to the road network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadCondition {
    /// Remove every road between the two cities
    Block(String, String),
    /// Re-weight existing roads between the two cities; never creates one
    Update(String, String, Distance),
    /// Add a road on each side that has none to the other city yet
    Add(String, String, Distance),
}

impl RoadCondition {
    /// Build a condition from its action tag, city pair and optional distance.
    ///
    /// `source` is only used to describe the condition in errors.
    pub fn from_parts(
        action: &str,
        cities: &[String],
        distance: Option<u64>,
        source: &str,
    ) -> Result<Self> {
        let action = action.trim().to_lowercase();
        let (a, b) = match cities {
            [a, b] => (a.trim(), b.trim()),
            _ => crate::bail_condition!(
                source,
                format!("expected 2 cities, got {}", cities.len())
            ),
        };
        if a.is_empty() || b.is_empty() {
            crate::bail_condition!(source, "city name is empty");
        }

        match (action.as_str(), distance) {
            ("block", None) => Ok(RoadCondition::Block(a.to_string(), b.to_string())),
            ("block", Some(_)) => crate::bail_condition!(source, "block takes no distance"),
            ("update", Some(d)) => Ok(RoadCondition::Update(
                a.to_string(),
                b.to_string(),
                Distance::new(d),
            )),
            ("add", Some(d)) => Ok(RoadCondition::Add(
                a.to_string(),
                b.to_string(),
                Distance::new(d),
            )),
            ("update" | "add", None) => {
                crate::bail_condition!(source, format!("{} requires a distance", action))
            }
            (other, _) => crate::bail_condition!(
                source,
                format!("unknown action '{}' (expected: block, update, add)", other)
            ),
        }
    }

    /// The two cities the condition names
    pub fn cities(&self) -> (&str, &str) {
        match self {
            RoadCondition::Block(a, b)
            | RoadCondition::Update(a, b, _)
            | RoadCondition::Add(a, b, _) => (a, b),
        }
    }
}

/// Parses `block:A:B`, `update:A:B:DISTANCE` and `add:A:B:DISTANCE`
impl FromStr for RoadCondition {
    type Err = crate::error::RoadnetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (action, rest) = match parts.split_first() {
            Some((action, rest)) => (*action, rest),
            None => crate::bail_condition!(s, "empty condition"),
        };

        let expected_fields = match action.trim().to_lowercase().as_str() {
            "block" => 2,
            "update" | "add" => 3,
            other => crate::bail_condition!(
                s,
                format!("unknown action '{}' (expected: block, update, add)", other)
            ),
        };
        if rest.len() != expected_fields {
            crate::bail_condition!(
                s,
                format!(
                    "{} takes {} fields after the action, got {}",
                    action,
                    expected_fields,
                    rest.len()
                )
            );
        }

        let cities: Vec<String> = rest[..2].iter().map(|c| c.to_string()).collect();
        let distance = match rest.get(2) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(d) => Some(d),
                Err(_) => crate::bail_condition!(
                    s,
                    format!("distance '{}' is not a non-negative integer", raw)
                ),
            },
            None => None,
        };

        RoadCondition::from_parts(action, &cities, distance, s)
    }
}

impl fmt::Display for RoadCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadCondition::Block(a, b) => write!(f, "block:{}:{}", a, b),
            RoadCondition::Update(a, b, d) => write!(f, "update:{}:{}:{}", a, b, d),
            RoadCondition::Add(a, b, d) => write!(f, "add:{}:{}:{}", a, b, d),
        }
    }
}

/// Apply `conditions` in order to a copy of `network`.
///
/// The input network is left untouched. A condition naming a city the
/// network does not know aborts the whole fold with `NodeNotFound`.
#[tracing::instrument(skip(network, conditions), fields(count = conditions.len()))]
pub fn apply_conditions(
    network: &RoadNetwork,
    conditions: &[RoadCondition],
) -> Result<RoadNetwork> {
    let mut edited = network.clone();
    for condition in conditions {
        apply_condition(&mut edited, condition)?;
        tracing::debug!(condition = %condition, "applied road condition");
    }
    Ok(edited)
}

fn apply_condition(network: &mut RoadNetwork, condition: &RoadCondition) -> Result<()> {
    let (a, b) = condition.cities();
    crate::ensure_city!(network, a);
    crate::ensure_city!(network, b);

    match condition {
        RoadCondition::Block(..) => {
            edit_roads(network, a, |roads| roads.retain(|road| road.to != b));
            edit_roads(network, b, |roads| roads.retain(|road| road.to != a));
        }
        RoadCondition::Update(_, _, distance) => {
            edit_roads(network, a, |roads| reweight(roads, b, *distance));
            edit_roads(network, b, |roads| reweight(roads, a, *distance));
        }
        RoadCondition::Add(_, _, distance) => {
            edit_roads(network, a, |roads| add_if_absent(roads, b, *distance));
            edit_roads(network, b, |roads| add_if_absent(roads, a, *distance));
        }
    }
    Ok(())
}

fn edit_roads(network: &mut RoadNetwork, city: &str, edit: impl FnOnce(&mut Vec<Road>)) {
    if let Some(roads) = network.adjacency_mut(city) {
        edit(roads);
    }
}

fn reweight(roads: &mut [Road], to: &str, distance: Distance) {
    for road in roads.iter_mut().filter(|road| road.to == to) {
        road.distance = distance;
    }
}

fn add_if_absent(roads: &mut Vec<Road>, to: &str, distance: Distance) {
    if !roads.iter().any(|road| road.to == to) {
        roads.push(Road {
            to: to.to_string(),
            distance,
        });
    }
}

/// Result of exploring an edited network
#[derive(Debug, Clone)]
pub struct Traversal {
    /// The network after every condition was applied
    pub network: RoadNetwork,
    pub route: Route,
}

/// Apply `conditions` to a copy of `network`, then run [`traverse_all`] on it
pub fn traverse_with_conditions(
    network: &RoadNetwork,
    start: &str,
    strategy: Strategy,
    conditions: &[RoadCondition],
) -> Result<Traversal> {
    let edited = apply_conditions(network, conditions)?;
    let route = traverse_all(&edited, start, strategy);
    Ok(Traversal {
        network: edited,
        route,
    })
}
