//! CLI commands for roadnet

pub mod dispatch;
pub mod helpers;
pub mod path;
pub mod show;
pub mod traverse;
