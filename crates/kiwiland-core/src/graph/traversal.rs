use crate::graph::types::{NodeIndex, Weight};

/// Trait for providing weighted adjacency to the graph algorithms
pub trait GraphProvider {
    fn node_count(&self) -> usize;

    /// Outgoing edges of `node` as `(neighbor, weight)` pairs, weight > 0
    fn outbound_edges(&self, node: NodeIndex) -> Vec<(NodeIndex, Weight)>;
}
