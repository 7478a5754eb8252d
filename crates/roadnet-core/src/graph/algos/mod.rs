//! Exhaustive path exploration
//!
//! Contains the two enumeration orders used by the explorer:
//! - `bfs`: queue-driven, path-membership gated
//! - `dfs`: visited set with backtracking, explicit stack
//! - `shared`: the candidate collection and its selection rule

pub mod bfs;
pub mod dfs;
pub mod shared;

pub use bfs::bfs_explore;
pub use dfs::dfs_explore;
pub use shared::Candidates;
