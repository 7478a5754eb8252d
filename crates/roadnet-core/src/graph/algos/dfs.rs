use crate::graph::algos::shared::Candidates;
use crate::graph::traversal::RoadProvider;
use crate::graph::types::{Cost, Road};
use std::collections::HashSet;
use std::slice::Iter;

/// One city on the current depth-first path, with the roads left to try
struct Frame<'a> {
    roads: Iter<'a, Road>,
    cost: Cost,
}

/// Depth-first enumeration of simple paths from `start`, with backtracking.
///
/// Entering a city marks it visited, appends it to the path and records the
/// path. Leaving it unmarks and pops it so sibling branches may pass through
/// it again. An explicit frame stack stands in for recursion and yields the
/// same order a recursive walk would.
pub fn dfs_explore(provider: &dyn RoadProvider, start: &str) -> Candidates {
    let mut candidates = Candidates::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut path: Vec<String> = Vec::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    visited.insert(start.to_string());
    path.push(start.to_string());
    candidates.record(path.clone(), Cost::ZERO);
    stack.push(Frame {
        roads: provider.roads_from(start).iter(),
        cost: Cost::ZERO,
    });

    while let Some(frame) = stack.last_mut() {
        match frame.roads.next() {
            Some(road) => {
                if visited.contains(&road.to) {
                    continue;
                }
                let cost = frame.cost + road.distance;
                visited.insert(road.to.clone());
                path.push(road.to.clone());
                candidates.record(path.clone(), cost);
                stack.push(Frame {
                    roads: provider.roads_from(&road.to).iter(),
                    cost,
                });
            }
            None => {
                stack.pop();
                if let Some(city) = path.pop() {
                    visited.remove(&city);
                }
            }
        }
    }

    tracing::debug!(candidates = candidates.len(), "depth-first exploration done");
    candidates
}
