//! Error macros for kiwiland

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::KiwilandError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid graph format errors
#[macro_export]
macro_rules! bail_graph_format {
    ($reason:expr) => {
        return Err($crate::error::KiwilandError::invalid_graph($reason))
    };
}
