use serde::Serialize;
use std::fmt;

/// Dense index of a node, assigned in first-seen order during parsing
pub type NodeIndex = usize;

/// Weight of a single directed edge. Zero means "no edge".
pub type Weight = u32;

/// Ordered sequence of node indices; repeats (cycles) are allowed
pub type Route = Vec<NodeIndex>;

/// Accumulated weight along a path.
///
/// `Distance::INFINITY` is the sentinel reported when a target cannot be
/// reached; it is never produced by summing real edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    pub const INFINITY: Distance = Distance(u64::MAX);

    pub fn new(value: u64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<Weight> for Distance {
    type Output = Self;

    /// Extending an infinite distance stays infinite
    fn add(self, weight: Weight) -> Self {
        if self.is_infinite() {
            return self;
        }
        Distance(self.0.saturating_add(u64::from(weight)).min(u64::MAX - 1))
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "infinity")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Result of a shortest-path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Total weight, or `Distance::INFINITY` when the target is unreachable
    pub distance: Distance,
    /// Nodes from source to target; empty when unreachable
    pub route: Route,
}

impl PathResult {
    pub fn unreachable() -> Self {
        PathResult {
            distance: Distance::INFINITY,
            route: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.distance.is_infinite()
    }
}
