//! Command trait implementation for the top-level subcommands

use crate::cli::Commands;
use crate::commands::output::Answer;
use crate::commands::query::{self, TripStops};
use crate::commands::session;
use kiwiland_core::bail_usage;
use kiwiland_core::error::Result;

use super::command::{Command, CommandContext};
use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info { graph } => {
                let graph = ctx.load_graph(graph)?;
                emit(ctx, &query::info(&graph), false, "info")
            }

            Commands::Distance { graph, route } => {
                let graph = ctx.load_graph(graph)?;
                emit(ctx, &query::distance(&graph, route)?, false, "distance")
            }

            Commands::Shortest { graph, from, to } => {
                let graph = ctx.load_graph(graph)?;
                emit(ctx, &query::shortest(&graph, from, to)?, false, "shortest")
            }

            Commands::Trips {
                graph,
                from,
                to,
                exact,
                max,
                list,
            } => {
                let stops = match (exact, max) {
                    (Some(stops), _) => TripStops::Exact(*stops),
                    (None, Some(stops)) => TripStops::AtMost(*stops),
                    (None, None) => bail_usage!("one of --exact or --max is required"),
                };
                let limits = ctx.limits()?;
                let graph = ctx.load_graph(graph)?;
                let answer = query::trips(&graph, from, to, stops, &limits)?;
                emit(ctx, &answer, list.list, "trips")
            }

            Commands::Routes {
                graph,
                from,
                to,
                below,
                list,
            } => {
                let limits = ctx.limits()?;
                let graph = ctx.load_graph(graph)?;
                let answer = query::routes_below(&graph, from, to, *below, &limits)?;
                emit(ctx, &answer, list.list, "routes")
            }

            Commands::Session { file } => {
                let limits = ctx.limits()?;
                let result = session::execute(file.as_deref(), limits, ctx.cli.format);
                trace_command!(ctx.cli, ctx.start, "session");
                result
            }
        }
    }
}

fn emit(ctx: &CommandContext, answer: &Answer, list: bool, label: &str) -> Result<()> {
    println!("{}", answer.render(ctx.cli.format, list)?);
    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), command = label, "command_done");
    }
    Ok(())
}
