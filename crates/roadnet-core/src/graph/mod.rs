//! Road network model and uninformed search
//!
//! Provides:
//! - `find_path`: point-to-point breadth-first or depth-first search
//! - `traverse_all`: exhaustive exploration selecting the longest route
//! - `apply_conditions`: block, re-weight or add roads on a network copy
//! - `to_dot`: Graphviz rendering with a highlighted route

pub mod algos;
pub mod conditions;
pub mod explore;
pub mod network;
pub mod path;
pub mod render;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use conditions::{apply_conditions, traverse_with_conditions, RoadCondition, Traversal};
pub use explore::{traverse_all, traverse_all_by_name};
pub use network::RoadNetwork;
pub use path::{find_path, find_path_by_name};
pub use render::to_dot;
pub use traversal::RoadProvider;
pub use types::{Cost, Distance, Road, Route, Strategy};
