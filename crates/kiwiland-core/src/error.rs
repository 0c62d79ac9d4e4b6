//! Error types and exit codes for kiwiland
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed graph or route text)
//! - 3: Data error (unknown node, broken route)

mod macros;

use thiserror::Error;

/// Exit codes for the kiwiland binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or malformed input text (2)
    Usage = 2,
    /// Data error - query against nodes or edges that do not exist (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a graph
#[derive(Error, Debug)]
pub enum KiwilandError {
    // Usage errors (exit code 2)
    #[error("invalid format for graph input (edge list with weight): {reason}")]
    InvalidGraphFormat { reason: String },

    #[error("invalid format for the route: {route:?}")]
    InvalidRouteFormat { route: String },

    #[error("{bound} of {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        bound: String,
        value: u64,
        limit: u64,
    },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no node found: {name}")]
    NodeNotFound { name: String },

    #[error("invalid route: {nodes} node(s) given, at least 2 are required")]
    InvalidRoute { nodes: usize },

    #[error("no such route")]
    NoSuchRoute,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl KiwilandError {
    /// Create an error for edge-list text that does not match the grammar
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        KiwilandError::InvalidGraphFormat {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unmapped node name
    pub fn node_not_found(name: impl Into<String>) -> Self {
        KiwilandError::NodeNotFound { name: name.into() }
    }

    /// Create an error for a query bound above its configured limit
    pub fn limit_exceeded(bound: &str, value: u64, limit: u64) -> Self {
        KiwilandError::LimitExceeded {
            bound: bound.to_string(),
            value,
            limit,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KiwilandError::InvalidGraphFormat { .. }
            | KiwilandError::InvalidRouteFormat { .. }
            | KiwilandError::LimitExceeded { .. }
            | KiwilandError::UnknownFormat(_)
            | KiwilandError::UsageError(_) => ExitCode::Usage,

            KiwilandError::NodeNotFound { .. }
            | KiwilandError::InvalidRoute { .. }
            | KiwilandError::NoSuchRoute => ExitCode::Data,

            KiwilandError::Io(_)
            | KiwilandError::Json(_)
            | KiwilandError::Toml(_)
            | KiwilandError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            KiwilandError::InvalidGraphFormat { .. } => "invalid_graph_format",
            KiwilandError::InvalidRouteFormat { .. } => "invalid_route_format",
            KiwilandError::LimitExceeded { .. } => "limit_exceeded",
            KiwilandError::UnknownFormat(_) => "unknown_format",
            KiwilandError::UsageError(_) => "usage_error",
            KiwilandError::NodeNotFound { .. } => "node_not_found",
            KiwilandError::InvalidRoute { .. } => "invalid_route",
            KiwilandError::NoSuchRoute => "no_such_route",
            KiwilandError::Io(_) => "io_error",
            KiwilandError::Json(_) => "json_error",
            KiwilandError::Toml(_) => "toml_error",
            KiwilandError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for kiwiland operations
pub type Result<T> = std::result::Result<T, KiwilandError>;
