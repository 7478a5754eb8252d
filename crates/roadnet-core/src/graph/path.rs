mod frontier;

use crate::graph::traversal::RoadProvider;
use crate::graph::types::{Cost, Route, Strategy};
pub use frontier::Frontier;
use std::collections::{HashSet, VecDeque};

/// Frontier entry: the city to expand and how we got there
struct SearchEntry {
    city: String,
    path: Vec<String>,
    cost: Cost,
}

/// Run the shared point-to-point loop over any frontier discipline.
///
/// A city joins `visited` when it is popped for expansion, not when it is
/// first discovered, so the same city may sit in the frontier several times.
/// Later copies are dropped when popped.
fn search<F: Frontier<SearchEntry>>(
    provider: &dyn RoadProvider,
    start: &str,
    goal: &str,
    mut frontier: F,
) -> Option<Route> {
    let mut visited: HashSet<String> = HashSet::new();
    frontier.push(SearchEntry {
        city: start.to_string(),
        path: vec![start.to_string()],
        cost: Cost::ZERO,
    });

    while let Some(entry) = frontier.pop() {
        if entry.city == goal {
            tracing::debug!(
                expanded = visited.len(),
                pending = frontier.len(),
                "goal reached"
            );
            return Some(Route::new(entry.path, entry.cost));
        }

        if !visited.insert(entry.city.clone()) {
            continue;
        }

        for road in provider.roads_from(&entry.city) {
            if visited.contains(&road.to) {
                continue;
            }
            let mut path = entry.path.clone();
            path.push(road.to.clone());
            frontier.push(SearchEntry {
                city: road.to.clone(),
                path,
                cost: entry.cost + road.distance,
            });
        }
    }

    tracing::debug!(expanded = visited.len(), "frontier exhausted");
    None
}

/// Find a path from `start` to `goal`.
///
/// Breadth-first returns the first goal match in FIFO order, which has the
/// fewest roads but not necessarily the lowest cost. Depth-first follows
/// adjacency order, most recently pushed first. Returns `None` when the goal
/// is unreachable.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal, strategy = %strategy))]
pub fn find_path(
    provider: &dyn RoadProvider,
    start: &str,
    goal: &str,
    strategy: Strategy,
) -> Option<Route> {
    match strategy {
        Strategy::BreadthFirst => search(provider, start, goal, VecDeque::new()),
        Strategy::DepthFirst => search(provider, start, goal, Vec::new()),
    }
}

/// [`find_path`] with the strategy given by tag. An unrecognised tag finds
/// nothing.
pub fn find_path_by_name(
    provider: &dyn RoadProvider,
    start: &str,
    goal: &str,
    strategy: &str,
) -> Option<Route> {
    match strategy.parse::<Strategy>() {
        Ok(strategy) => find_path(provider, start, goal, strategy),
        Err(e) => {
            tracing::warn!(error = %e, "no search performed");
            None
        }
    }
}
