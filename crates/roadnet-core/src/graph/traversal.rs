use crate::graph::network::RoadNetwork;
use crate::graph::types::Road;

/// Trait for providing read-only road adjacency to the searches
pub trait RoadProvider {
    /// Roads leaving `city`, in adjacency order. Unknown cities have none.
    fn roads_from(&self, city: &str) -> &[Road];
    fn has_city(&self, city: &str) -> bool;
}

impl RoadProvider for RoadNetwork {
    fn roads_from(&self, city: &str) -> &[Road] {
        self.roads_from(city)
    }

    fn has_city(&self, city: &str) -> bool {
        self.contains(city)
    }
}
