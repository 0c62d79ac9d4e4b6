//! Graph algorithm implementations
//!
//! - `dijkstra`: minimum-weight path between two nodes
//! - `routes`: breadth-first enumeration of bounded routes

pub mod dijkstra;
pub mod routes;

pub use dijkstra::dijkstra_shortest_path;
pub use routes::{enumerate_routes, RouteConstraint};
