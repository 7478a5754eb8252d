use crate::graph::algos::shared::Candidates;
use crate::graph::traversal::RoadProvider;
use crate::graph::types::Cost;
use std::collections::VecDeque;

/// Breadth-first enumeration of simple paths from `start`.
///
/// Every dequeued path is recorded. A neighbor is only queued if it is not
/// already on the path being extended; there is no shared visited set, so a
/// city can end many distinct queued paths.
pub fn bfs_explore(provider: &dyn RoadProvider, start: &str) -> Candidates {
    let mut candidates = Candidates::new();
    let mut queue: VecDeque<(Vec<String>, Cost)> = VecDeque::new();
    queue.push_back((vec![start.to_string()], Cost::ZERO));

    while let Some((path, cost)) = queue.pop_front() {
        if let Some(current) = path.last() {
            for road in provider.roads_from(current) {
                if path.contains(&road.to) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(road.to.clone());
                queue.push_back((extended, cost + road.distance));
            }
        }
        candidates.record(path, cost);
    }

    tracing::debug!(candidates = candidates.len(), "breadth-first exploration done");
    candidates
}
