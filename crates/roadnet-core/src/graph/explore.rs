use crate::error::Result;
use crate::graph::algos::{bfs_explore, dfs_explore};
use crate::graph::traversal::RoadProvider;
use crate::graph::types::{Route, Strategy};

/// Explore every simple path from `start` and pick the one that visits the
/// most cities, cheapest among equals.
///
/// This is not a shortest-path search. The zero-length route at `start` is
/// always a candidate, so a result always exists.
#[tracing::instrument(skip(provider), fields(start = %start, strategy = %strategy))]
pub fn traverse_all(provider: &dyn RoadProvider, start: &str, strategy: Strategy) -> Route {
    let candidates = match strategy {
        Strategy::BreadthFirst => bfs_explore(provider, start),
        Strategy::DepthFirst => dfs_explore(provider, start),
    };

    candidates.into_best().unwrap_or_else(|| Route::at(start))
}

/// [`traverse_all`] with the strategy given by tag.
///
/// An unrecognised tag is an `InvalidStrategy` error.
pub fn traverse_all_by_name(
    provider: &dyn RoadProvider,
    start: &str,
    strategy: &str,
) -> Result<Route> {
    let strategy: Strategy = strategy.parse()?;
    Ok(traverse_all(provider, start, strategy))
}
