//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default largest stop count accepted by trip queries
pub const DEFAULT_MAX_STOPS: usize = 16;

/// Default largest distance bound accepted by route queries
pub const DEFAULT_MAX_DISTANCE: u64 = 150;

/// Kiwiland configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiwilandConfig {
    /// Bounds applied to route enumeration queries
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Upper bounds for enumeration parameters.
///
/// Route enumeration grows exponentially with its bound, so the command layer
/// rejects requests above these values before any traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest stop count for `trips` queries
    #[serde(default = "default_max_stops")]
    pub max_stops: usize,

    /// Largest distance bound for `routes` queries
    #[serde(default = "default_max_distance")]
    pub max_distance: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_stops: default_max_stops(),
            max_distance: default_max_distance(),
        }
    }
}

fn default_max_stops() -> usize {
    DEFAULT_MAX_STOPS
}

fn default_max_distance() -> u64 {
    DEFAULT_MAX_DISTANCE
}
