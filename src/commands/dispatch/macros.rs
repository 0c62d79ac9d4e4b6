//! Tracing helpers for command dispatch

/// Trace command execution when verbose mode is enabled
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.cli, ctx.start, "shortest");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
