use crate::graph::types::{Cost, Route};
use std::cmp::Reverse;

/// Every `(path, cost)` pair observed while exploring, in observation order
#[derive(Debug, Default)]
pub struct Candidates {
    routes: Vec<Route>,
}

impl Candidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: Vec<String>, cost: Cost) {
        self.routes.push(Route::new(path, cost));
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// The candidate visiting the most cities, cheapest among those.
    /// Exact ties keep the earliest recorded candidate.
    pub fn into_best(self) -> Option<Route> {
        self.routes.into_iter().fold(None, |best, candidate| match best {
            Some(best) if rank(&candidate) <= rank(&best) => Some(best),
            _ => Some(candidate),
        })
    }
}

/// Selection key: longer first, then cheaper
fn rank(route: &Route) -> (usize, Reverse<Cost>) {
    (route.len(), Reverse(route.cost))
}
