//! Graphviz rendering of a road network
//!
//! Produces an undirected `graph` with every road labelled by its distance.
//! Roads on an optional highlighted path are drawn red and bold.

use crate::graph::network::RoadNetwork;
use std::collections::HashSet;
use std::fmt::Write;

const NODE_STYLE: &str = "shape=ellipse, style=filled, fillcolor=skyblue, fontsize=10";
const HIGHLIGHT_STYLE: &str = "color=red, penwidth=2";

/// Quote a DOT identifier
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Unordered city pair, so a road matches the path in either direction
fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Render `network` as DOT, highlighting consecutive pairs of `path`
pub fn to_dot(network: &RoadNetwork, title: &str, path: Option<&[String]>) -> String {
    let highlighted: HashSet<(&str, &str)> = path
        .map(|cities| {
            cities
                .windows(2)
                .map(|leg| pair_key(&leg[0], &leg[1]))
                .collect()
        })
        .unwrap_or_default();

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "graph {} {{", quote(title));
    let _ = writeln!(out, "  label={};", quote(title));
    let _ = writeln!(out, "  node [{}];", NODE_STYLE);
    for city in network.cities() {
        let _ = writeln!(out, "  {};", quote(city));
    }
    for (a, b, distance) in network.road_pairs() {
        let label = format!("label={}", quote(&distance.to_string()));
        if highlighted.contains(&pair_key(a, b)) {
            let _ = writeln!(
                out,
                "  {} -- {} [{}, {}];",
                quote(a),
                quote(b),
                label,
                HIGHLIGHT_STYLE
            );
        } else {
            let _ = writeln!(out, "  {} -- {} [{}];", quote(a), quote(b), label);
        }
    }
    out.push_str("}\n");
    out
}
