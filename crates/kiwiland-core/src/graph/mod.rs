//! Graph model and route queries
//!
//! - `model`: the immutable weighted graph and its name-based API
//! - `algos`: shortest path and bounded route enumeration
//! - `queue`: min-priority queue used as the shortest-path frontier
//! - `parse`: edge-list and route text grammars
//! - `traversal`: adjacency trait consumed by the algorithms

pub mod algos;
pub mod model;
pub mod parse;
pub mod queue;
pub mod traversal;
pub mod types;

pub use algos::{dijkstra_shortest_path, enumerate_routes, RouteConstraint};
pub use model::Graph;
pub use parse::{parse_edge_list, parse_route, ParsedEdge};
pub use queue::PriorityQueue;
pub use traversal::GraphProvider;
pub use types::{Distance, NodeIndex, PathResult, Route, Weight};
