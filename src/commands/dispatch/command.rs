//! Command trait and context for dispatching commands

use std::fs;
use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use kiwiland_core::config::{KiwilandConfig, LimitsConfig};
use kiwiland_core::error::{KiwilandError, Result};
use kiwiland_core::graph::Graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load configuration from `--config` or the default location
    pub fn load_config(&self) -> Result<KiwilandConfig> {
        match &self.cli.config {
            Some(path) => KiwilandConfig::load_from(path),
            None => KiwilandConfig::load(),
        }
    }

    pub fn limits(&self) -> Result<LimitsConfig> {
        Ok(self.load_config()?.limits)
    }

    /// Build the graph named by `--graph` or `--graph-file`
    pub fn load_graph(&self, args: &GraphArgs) -> Result<Graph> {
        let graph = match (&args.graph, &args.graph_file) {
            (Some(edges), _) => Graph::parse(edges)?,
            (None, Some(path)) => {
                let content = fs::read_to_string(path)?;
                let first_line = content
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .ok_or_else(|| {
                        KiwilandError::invalid_graph(format!(
                            "{} contains no edge list",
                            path.display()
                        ))
                    })?;
                Graph::parse(first_line)?
            }
            (None, None) => {
                return Err(KiwilandError::UsageError(
                    "one of --graph or --graph-file is required".to_string(),
                ))
            }
        };
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("kiwiland {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Distance, shortest-route and route-counting queries over a weighted network.");
        println!();
        println!("Run `kiwiland --help` for usage information.");
        Ok(())
    }
}
