use std::collections::VecDeque;

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeIndex, Route, Weight};

/// Bound applied to a route enumeration.
///
/// Sizes count nodes, so a route with `n` stops has size `n + 1`. Every
/// variant only accepts routes of at least two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteConstraint {
    /// Routes of exactly this many nodes
    ExactSize(usize),
    /// Routes of at most this many nodes
    MaxSize(usize),
    /// Routes whose total weight is strictly below this bound
    WeightBelow(u64),
}

impl RouteConstraint {
    /// Whether a partial route may stay on the frontier
    fn allows_expansion(&self, route: &PartialRoute) -> bool {
        match *self {
            RouteConstraint::ExactSize(size) | RouteConstraint::MaxSize(size) => {
                route.nodes.len() <= size
            }
            RouteConstraint::WeightBelow(bound) => route.weight < bound,
        }
    }

    /// Whether a route ending at the target is part of the result
    fn accepts(&self, route: &PartialRoute) -> bool {
        let size = route.nodes.len();
        if size < 2 {
            return false;
        }
        match *self {
            RouteConstraint::ExactSize(expected) => size == expected,
            RouteConstraint::MaxSize(max) => size <= max,
            RouteConstraint::WeightBelow(_) => true,
        }
    }
}

/// Route on the frontier together with its accumulated weight
#[derive(Debug, Clone)]
struct PartialRoute {
    nodes: Route,
    weight: u64,
}

impl PartialRoute {
    fn start(node: NodeIndex) -> Self {
        PartialRoute {
            nodes: vec![node],
            weight: 0,
        }
    }

    fn last(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    fn extended(&self, node: NodeIndex, weight: Weight) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        PartialRoute {
            nodes,
            weight: self.weight + u64::from(weight),
        }
    }
}

/// Enumerate every route from `source` to `target` allowed by `constraint`.
///
/// Level-order expansion over partial routes: nodes may repeat, so cycles
/// are found, and results come out in non-decreasing size. Nothing is
/// deduplicated or memoized; the frontier grows exponentially with the
/// bound on dense graphs.
#[tracing::instrument(skip(provider), fields(nodes = provider.node_count()))]
pub fn enumerate_routes(
    provider: &dyn GraphProvider,
    source: NodeIndex,
    target: NodeIndex,
    constraint: RouteConstraint,
) -> Vec<Route> {
    let mut routes = Vec::new();
    if source >= provider.node_count() {
        return routes;
    }

    let mut frontier: VecDeque<PartialRoute> = VecDeque::new();
    frontier.push_back(PartialRoute::start(source));
    let mut expanded = 0usize;

    while let Some(route) = frontier.pop_front() {
        expanded += 1;
        let last = route.last();

        for (neighbor, weight) in provider.outbound_edges(last) {
            let candidate = route.extended(neighbor, weight);
            if constraint.allows_expansion(&candidate) {
                frontier.push_back(candidate);
            }
        }

        if last == target && constraint.accepts(&route) {
            routes.push(route.nodes);
        }
    }

    tracing::debug!(expanded, found = routes.len(), "route enumeration finished");
    routes
}
