//! Shared network fixtures for unit tests

use crate::graph::network::RoadNetwork;

pub const ADDIS_ABABA: &str = "Addis Ababa";
pub const BAHIR_DAR: &str = "Bahir Dar";
pub const GONDAR: &str = "Gondar";
pub const HAWASSA: &str = "Hawassa";
pub const MEKELLE: &str = "Mekelle";

/// Five Ethiopian cities joined by four roads
pub fn ethiopia() -> RoadNetwork {
    let mut network =
        RoadNetwork::new([ADDIS_ABABA, BAHIR_DAR, GONDAR, HAWASSA, MEKELLE]).unwrap();
    network.add_road(ADDIS_ABABA, BAHIR_DAR, 510).unwrap();
    network.add_road(ADDIS_ABABA, HAWASSA, 275).unwrap();
    network.add_road(BAHIR_DAR, GONDAR, 180).unwrap();
    network.add_road(GONDAR, MEKELLE, 300).unwrap();
    network
}

/// A-B-D is cheap, A-C-D is expensive; A lists B first
pub fn diamond() -> RoadNetwork {
    let mut network = RoadNetwork::new(["A", "B", "C", "D"]).unwrap();
    network.add_road("A", "B", 1).unwrap();
    network.add_road("A", "C", 5).unwrap();
    network.add_road("B", "D", 1).unwrap();
    network.add_road("C", "D", 1).unwrap();
    network
}

/// Build a network from `(a, b, distance)` triples over cities named by index
pub fn numbered(cities: usize, roads: &[(usize, usize, u64)]) -> RoadNetwork {
    let mut network = RoadNetwork::new((0..cities).map(|i| format!("n{}", i))).unwrap();
    for &(a, b, distance) in roads {
        network
            .add_road(&format!("n{}", a), &format!("n{}", b), distance)
            .unwrap();
    }
    network
}

/// Small deterministic pseudo-random generator for graph-shaped tests
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// A random simple graph on `cities` nodes with roughly `density`% of pairs joined
pub fn random_network(rng: &mut Lcg, cities: usize, density: u64) -> RoadNetwork {
    let mut roads = Vec::new();
    for a in 0..cities {
        for b in (a + 1)..cities {
            if rng.next_below(100) < density {
                roads.push((a, b, 1 + rng.next_below(20)));
            }
        }
    }
    numbered(cities, &roads)
}
