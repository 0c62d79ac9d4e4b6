//! CLI argument parsing for kiwiland
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, ListArgs};
pub use kiwiland_core::format::OutputFormat;
use parse::{parse_node_name, parse_output_format};

/// Kiwiland - route planner for small directed, weighted networks
#[derive(Parser, Debug)]
#[command(name = "kiwiland")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress error messages on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level or filter (e.g. `debug`, `kiwiland_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "KIWILAND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node and edge counts of a graph
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Total distance of an explicit route such as A-B-C
    Distance {
        #[command(flatten)]
        graph: GraphArgs,

        /// Dash-separated route
        route: String,
    },

    /// Length of the shortest route between two nodes
    Shortest {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(value_parser = parse_node_name)]
        from: String,

        /// End node (same as start for the shortest round trip)
        #[arg(value_parser = parse_node_name)]
        to: String,
    },

    /// Count trips between two nodes by number of stops
    Trips {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(value_parser = parse_node_name)]
        from: String,

        /// End node
        #[arg(value_parser = parse_node_name)]
        to: String,

        /// Trips with exactly this many stops
        #[arg(long, conflicts_with = "max", required_unless_present = "max")]
        exact: Option<usize>,

        /// Trips with at most this many stops
        #[arg(long)]
        max: Option<usize>,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Count routes between two nodes shorter than a distance
    Routes {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(value_parser = parse_node_name)]
        from: String,

        /// End node
        #[arg(value_parser = parse_node_name)]
        to: String,

        /// Only routes with a total distance strictly below this value
        #[arg(long)]
        below: u64,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Interactive session: first line is the edge list, then one command per line
    Session {
        /// Read the session from a file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
}
