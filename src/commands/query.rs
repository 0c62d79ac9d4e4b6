//! Query execution shared by the one-shot subcommands and the session

use kiwiland_core::config::LimitsConfig;
use kiwiland_core::error::{KiwilandError, Result};
use kiwiland_core::graph::{Graph, NodeIndex, Route};

use crate::commands::output::Answer;

/// Stop bound of a trip query. A trip with `n` stops visits `n + 1` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStops {
    Exact(usize),
    AtMost(usize),
}

impl TripStops {
    fn stops(&self) -> usize {
        match *self {
            TripStops::Exact(stops) | TripStops::AtMost(stops) => stops,
        }
    }
}

pub fn info(graph: &Graph) -> Answer {
    Answer::Info {
        nodes: graph.nodes().map(str::to_string).collect(),
        edges: graph.edge_count(),
    }
}

/// Total distance of a dash-separated route
pub fn distance(graph: &Graph, route: &str) -> Result<Answer> {
    Ok(Answer::Distance {
        distance: graph.route_length_str(route)?,
        route: None,
    })
}

/// Shortest distance between two nodes; an unreachable target is an error here
pub fn shortest(graph: &Graph, from: &str, to: &str) -> Result<Answer> {
    let path = graph.shortest_path(from, to)?;
    if !path.is_reachable() {
        return Err(KiwilandError::NoSuchRoute);
    }
    Ok(Answer::Distance {
        distance: path.distance.value(),
        route: Some(names(graph, &path.route)?),
    })
}

pub fn trips(
    graph: &Graph,
    from: &str,
    to: &str,
    stops: TripStops,
    limits: &LimitsConfig,
) -> Result<Answer> {
    limits.check_stops(stops.stops())?;
    let routes = match stops {
        TripStops::Exact(stops) => graph.routes_of_exact_size(from, to, stops + 1)?,
        TripStops::AtMost(stops) => graph.routes_of_max_size(from, to, stops + 1)?,
    };
    routes_answer(graph, &routes)
}

pub fn routes_below(
    graph: &Graph,
    from: &str,
    to: &str,
    bound: u64,
    limits: &LimitsConfig,
) -> Result<Answer> {
    limits.check_distance(bound)?;
    let routes = graph.routes_below_length(from, to, bound)?;
    routes_answer(graph, &routes)
}

fn names(graph: &Graph, route: &[NodeIndex]) -> Result<Vec<String>> {
    let names = graph.route_names(route).ok_or_else(|| unknown_index(route))?;
    Ok(names.into_iter().map(str::to_string).collect())
}

fn routes_answer(graph: &Graph, routes: &[Route]) -> Result<Answer> {
    let formatted = routes
        .iter()
        .map(|r| graph.format_route(r).ok_or_else(|| unknown_index(r)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Answer::Routes(formatted))
}

fn unknown_index(route: &[NodeIndex]) -> KiwilandError {
    KiwilandError::Other(format!("route {route:?} refers to a node outside the graph"))
}
