//! Parsing of edge-list and route text
//!
//! Edge lists look like `AB5, BC4, CD8`: each token is a one-letter source,
//! a one-letter destination and an unsigned weight. Routes look like `A-B-C`.

use std::sync::OnceLock;

use regex::Regex;

use crate::bail_graph_format;
use crate::error::{KiwilandError, Result};
use crate::graph::types::Weight;

static EDGE_LIST_RE: OnceLock<Regex> = OnceLock::new();
static EDGE_RE: OnceLock<Regex> = OnceLock::new();
static ROUTE_RE: OnceLock<Regex> = OnceLock::new();

fn edge_list_re() -> &'static Regex {
    EDGE_LIST_RE.get_or_init(|| {
        Regex::new(r"^\s*[A-Za-z]{2}[0-9]+(?:\s*,\s*[A-Za-z]{2}[0-9]+)*\s*$")
            .expect("Invalid edge list regex pattern")
    })
}

fn edge_re() -> &'static Regex {
    EDGE_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z])([A-Za-z])([0-9]+)$").expect("Invalid edge regex pattern")
    })
}

fn route_re() -> &'static Regex {
    ROUTE_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z](?:-[A-Za-z])*$").expect("Invalid route regex pattern")
    })
}

/// A single parsed edge, still referring to nodes by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEdge {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

/// Parse comma-separated edge text such as `AB5, BC4`.
///
/// The whole input is validated against the grammar before any token is
/// interpreted. Weights that overflow or are zero are rejected as well.
pub fn parse_edge_list(input: &str) -> Result<Vec<ParsedEdge>> {
    if !edge_list_re().is_match(input) {
        bail_graph_format!("expected comma-separated edges like AB5, BC4");
    }

    input.split(',').map(|token| parse_edge(token.trim())).collect()
}

fn parse_edge(token: &str) -> Result<ParsedEdge> {
    let Some(caps) = edge_re().captures(token) else {
        bail_graph_format!(format!("malformed edge {token:?}"));
    };

    let weight: Weight = caps[3].parse().map_err(|e| {
        KiwilandError::invalid_graph(format!("weight of edge {token:?} is not valid: {e}"))
    })?;
    if weight == 0 {
        bail_graph_format!(format!("edge {token:?} has zero weight"));
    }

    Ok(ParsedEdge {
        source: caps[1].to_string(),
        destination: caps[2].to_string(),
        weight,
    })
}

/// Split dash-separated route text such as `A-B-C` into node names
pub fn parse_route(route: &str) -> Result<Vec<&str>> {
    let trimmed = route.trim();
    if !route_re().is_match(trimmed) {
        return Err(KiwilandError::InvalidRouteFormat {
            route: route.to_string(),
        });
    }
    Ok(trimmed.split('-').collect())
}
