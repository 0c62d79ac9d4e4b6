//! The immutable weighted graph and its name-based query API

use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;
use std::time::Instant;

use crate::error::{KiwilandError, Result};
use crate::graph::algos::{dijkstra_shortest_path, enumerate_routes, RouteConstraint};
use crate::graph::parse::{parse_edge_list, parse_route, ParsedEdge};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, NodeIndex, PathResult, Route, Weight};
use crate::trace_time;

/// Directed, positively weighted graph over named nodes.
///
/// `weights[i][j] > 0` is an edge from node `i` to node `j`; zero means no
/// edge. Node indices are assigned in the order names first appear in the
/// edge list. A `Graph` is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    weights: Vec<Vec<Weight>>,
    node_ids: HashMap<String, NodeIndex>,
    node_names: Vec<String>,
}

impl Graph {
    /// Build a graph from edge-list text such as `AB5, BC4, CD8`
    #[tracing::instrument(skip(input), fields(input_len = input.len()))]
    pub fn parse(input: &str) -> Result<Self> {
        let start = Instant::now();
        let edges = parse_edge_list(input)?;
        let graph = Self::from_edges(&edges);
        trace_time!(start, "build_graph", nodes = graph.node_count());
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Read all of `reader` and parse it as edge-list text
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    /// Build a graph from already parsed edges.
    /// A repeated ordered pair keeps the weight of its last occurrence.
    pub fn from_edges(edges: &[ParsedEdge]) -> Self {
        let mut node_ids: HashMap<String, NodeIndex> = HashMap::new();
        let mut node_names: Vec<String> = Vec::new();
        let mut indexed = Vec::with_capacity(edges.len());

        let mut intern = |name: &str| -> NodeIndex {
            if let Some(&id) = node_ids.get(name) {
                return id;
            }
            let id = node_names.len();
            node_ids.insert(name.to_string(), id);
            node_names.push(name.to_string());
            id
        };

        for edge in edges {
            let source = intern(&edge.source);
            let destination = intern(&edge.destination);
            indexed.push((source, destination, edge.weight));
        }

        let n = node_names.len();
        let mut weights = vec![vec![0; n]; n];
        for (source, destination, weight) in indexed {
            weights[source][destination] = weight;
        }

        Graph {
            weights,
            node_ids,
            node_names,
        }
    }

    /// Number of distinct node names
    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of ordered node pairs joined by an edge
    pub fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .map(|row| row.iter().filter(|&&w| w > 0).count())
            .sum()
    }

    /// Node names in index order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_names.iter().map(String::as_str)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeIndex> {
        self.node_ids.get(name).copied()
    }

    pub fn node_name(&self, index: NodeIndex) -> Option<&str> {
        self.node_names.get(index).map(String::as_str)
    }

    /// Weight of the edge `from -> to`, or `None` if there is no such edge
    pub fn weight(&self, from: NodeIndex, to: NodeIndex) -> Option<Weight> {
        self.weights
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|&w| w > 0)
    }

    /// Resolve a node name, failing with `NodeNotFound`
    pub fn resolve(&self, name: &str) -> Result<NodeIndex> {
        self.node_id(name)
            .ok_or_else(|| KiwilandError::node_not_found(name))
    }

    /// Node names along `route`, or `None` if any index is outside the graph
    pub fn route_names(&self, route: &[NodeIndex]) -> Option<Vec<&str>> {
        route.iter().map(|&index| self.node_name(index)).collect()
    }

    /// Render `route` as `A-B-C`, or `None` if any index is outside the graph
    pub fn format_route(&self, route: &[NodeIndex]) -> Option<String> {
        self.route_names(route).map(|names| names.join("-"))
    }

    /// Total weight of an explicit sequence of node names
    pub fn route_length<S: AsRef<str>>(&self, route: &[S]) -> Result<u64> {
        if route.len() < 2 {
            return Err(KiwilandError::InvalidRoute { nodes: route.len() });
        }
        let indices = route
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.route_weight(&indices)
    }

    /// Total weight of dash-separated route text such as `A-B-C`
    pub fn route_length_str(&self, route: &str) -> Result<u64> {
        let names = parse_route(route)?;
        self.route_length(&names)
    }

    /// Sum the weights along a route of indices; any missing edge fails
    pub(crate) fn route_weight(&self, route: &[NodeIndex]) -> Result<u64> {
        route.windows(2).try_fold(0u64, |total, pair| {
            self.weight(pair[0], pair[1])
                .map(|w| total + u64::from(w))
                .ok_or(KiwilandError::NoSuchRoute)
        })
    }

    /// Minimum total weight from `source` to `target`.
    ///
    /// When `source == target` this is the shortest cycle of positive length
    /// through the node. An unreachable target yields `Distance::INFINITY`.
    pub fn min_distance(&self, source: &str, target: &str) -> Result<Distance> {
        Ok(self.shortest_path(source, target)?.distance)
    }

    /// Shortest path from `source` to `target`, including the node sequence
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<PathResult> {
        let (source, target) = self.resolve_endpoints(source, target)?;
        Ok(dijkstra_shortest_path(self, source, target))
    }

    /// All routes from `source` to `target` made of exactly `size` nodes.
    ///
    /// Routes may revisit nodes. The number of candidate routes grows
    /// exponentially with `size`; callers must keep it small.
    pub fn routes_of_exact_size(
        &self,
        source: &str,
        target: &str,
        size: usize,
    ) -> Result<Vec<Route>> {
        self.routes(source, target, RouteConstraint::ExactSize(size))
    }

    /// All routes from `source` to `target` made of at most `size` nodes.
    /// Same growth caveat as [`Graph::routes_of_exact_size`].
    pub fn routes_of_max_size(
        &self,
        source: &str,
        target: &str,
        size: usize,
    ) -> Result<Vec<Route>> {
        self.routes(source, target, RouteConstraint::MaxSize(size))
    }

    /// All routes from `source` to `target` whose total weight is below `bound`.
    /// Same growth caveat as [`Graph::routes_of_exact_size`].
    pub fn routes_below_length(
        &self,
        source: &str,
        target: &str,
        bound: u64,
    ) -> Result<Vec<Route>> {
        self.routes(source, target, RouteConstraint::WeightBelow(bound))
    }

    fn routes(&self, source: &str, target: &str, constraint: RouteConstraint) -> Result<Vec<Route>> {
        let (source, target) = self.resolve_endpoints(source, target)?;
        Ok(enumerate_routes(self, source, target, constraint))
    }

    fn resolve_endpoints(&self, source: &str, target: &str) -> Result<(NodeIndex, NodeIndex)> {
        Ok((self.resolve(source)?, self.resolve(target)?))
    }
}

impl GraphProvider for Graph {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn outbound_edges(&self, node: NodeIndex) -> Vec<(NodeIndex, Weight)> {
        self.weights
            .get(node)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &w)| w > 0)
                    .map(|(to, &w)| (to, w))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FromStr for Graph {
    type Err = KiwilandError;

    fn from_str(s: &str) -> Result<Self> {
        Graph::parse(s)
    }
}
