use crate::graph::queue::PriorityQueue;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, NodeIndex, PathResult, Route};

/// State tracked during a single Dijkstra search
struct DijkstraState {
    finalized: Vec<bool>,
    distance: Vec<Distance>,
    parent: Vec<Option<NodeIndex>>,
    frontier: PriorityQueue<NodeIndex, Distance>,
}

impl DijkstraState {
    fn new(node_count: usize) -> Self {
        Self {
            finalized: vec![false; node_count],
            distance: vec![Distance::INFINITY; node_count],
            parent: vec![None; node_count],
            frontier: PriorityQueue::new(),
        }
    }

    /// Record `candidate` as the distance to `to` via `from` if it improves
    fn relax(&mut self, from: NodeIndex, to: NodeIndex, candidate: Distance) {
        if self.finalized[to] || candidate >= self.distance[to] {
            return;
        }
        self.distance[to] = candidate;
        self.parent[to] = Some(from);
        self.frontier.push(to, candidate);
    }

    /// Walk parent links back from `target` until `source` is reached
    fn route_to(&self, source: NodeIndex, target: NodeIndex) -> Route {
        let mut route = vec![target];
        let mut current = target;
        while let Some(previous) = self.parent[current] {
            route.push(previous);
            if previous == source {
                break;
            }
            current = previous;
        }
        route.reverse();
        route
    }
}

/// Minimum-weight path from `source` to `target`.
///
/// For `source == target` the search looks for the shortest cycle of positive
/// length: the frontier is seeded with the source's direct neighbors at their
/// edge weights and the source stays open, so it can only be finalized by
/// returning to it over a real edge.
///
/// Stale frontier entries are skipped on pop. An unreachable target (or an
/// index outside the graph) yields `PathResult::unreachable()`.
#[tracing::instrument(skip(provider), fields(nodes = provider.node_count()))]
pub fn dijkstra_shortest_path(
    provider: &dyn GraphProvider,
    source: NodeIndex,
    target: NodeIndex,
) -> PathResult {
    let node_count = provider.node_count();
    if source >= node_count || target >= node_count {
        return PathResult::unreachable();
    }

    let mut state = DijkstraState::new(node_count);
    if source == target {
        for (neighbor, weight) in provider.outbound_edges(source) {
            state.relax(source, neighbor, Distance::ZERO + weight);
        }
    } else {
        state.distance[source] = Distance::ZERO;
        state.frontier.push(source, Distance::ZERO);
    }

    while let Some((node, cost)) = state.frontier.pop_with_priority() {
        if state.finalized[node] || cost > state.distance[node] {
            continue;
        }
        state.finalized[node] = true;
        if node == target {
            break;
        }

        for (neighbor, weight) in provider.outbound_edges(node) {
            state.relax(node, neighbor, cost + weight);
        }
    }

    if !state.finalized[target] {
        tracing::debug!(source, target, "target unreachable");
        return PathResult::unreachable();
    }

    let result = PathResult {
        distance: state.distance[target],
        route: state.route_to(source, target),
    };
    tracing::debug!(
        source,
        target,
        distance = %result.distance,
        hops = result.route.len().saturating_sub(1),
        "shortest path found"
    );
    result
}
