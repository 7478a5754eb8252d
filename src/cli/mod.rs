//! CLI argument parsing for roadnet
//!
//! Supports global flags: --network, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;
pub use roadnet_core::format::OutputFormat;

/// Roadnet - breadth-first and depth-first search over road networks
#[derive(Parser, Debug)]
#[command(name = "roadnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network file (defaults to ./roadnet.toml)
    #[arg(long, short, global = true, env = "ROADNET_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format (human, json, dot)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "roadnet_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two cities
    Path {
        /// Starting city
        from: String,

        /// Destination city
        to: String,

        /// Search strategy (breadth-first, bfs, depth-first, dfs)
        #[arg(long, short, default_value = "breadth-first")]
        strategy: String,
    },

    /// Explore every route from a city and report the longest
    ///
    /// Road conditions listed in the network file are applied by default,
    /// followed by any --condition flags. Pass --ignore-file-conditions to
    /// explore the network exactly as its roads are written.
    Traverse {
        /// Starting city
        start: String,

        /// Search strategy (breadth-first, bfs, depth-first, dfs)
        #[arg(long, short, default_value = "breadth-first")]
        strategy: String,

        /// Road condition, applied after the file's conditions
        /// (block:A:B, update:A:B:DISTANCE, add:A:B:DISTANCE)
        #[arg(long = "condition", short = 'c', action = clap::ArgAction::Append)]
        conditions: Vec<String>,

        /// Skip the conditions listed in the network file (they apply by default)
        #[arg(long)]
        ignore_file_conditions: bool,
    },

    /// Print the network, optionally after road conditions
    Show {
        /// Road condition to apply before printing
        #[arg(long = "condition", short = 'c', action = clap::ArgAction::Append)]
        conditions: Vec<String>,

        /// Write the resulting network to a new network file instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
