//! Roadnet Core Library
//!
//! Uninformed search over weighted, undirected road networks.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
