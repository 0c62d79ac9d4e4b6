//! Interactive session: the first line of input is the edge list, every
//! following line is one query. A failing query prints its error and the
//! session continues; only an unreadable input or a bad edge list end it.

pub mod parse;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use kiwiland_core::config::LimitsConfig;
use kiwiland_core::error::{KiwilandError, Result};
use kiwiland_core::format::OutputFormat;
use kiwiland_core::graph::Graph;

use crate::commands::output::{render_error, Answer};
use crate::commands::query;
use parse::{parse_command, SessionCommand};

pub const SESSION_HELP: &str = "\
Enter the edge list on the first line, e.g.: AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7
Then one command per line:
  distance of route X-Y-Z         total distance of an explicit route
  shortest route X Y              length of the shortest route from X to Y
  all routes X Y distance < N     number of routes from X to Y shorter than N
  all trips X Y steps = N         number of trips from X to Y with exactly N stops
  all trips X Y steps <= N        number of trips from X to Y with at most N stops
  help                            show this message
  exit                            end the session";

/// Run a session over stdin, or over `file` when given
pub fn execute(file: Option<&Path>, limits: LimitsConfig, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let writer = stdout.lock();
    match file {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            Session::new(reader, writer, limits, format).run()
        }
        None => Session::new(io::stdin().lock(), writer, limits, format).run(),
    }
}

/// Per-session state; nothing outlives a single run
pub struct Session<R, W> {
    reader: R,
    writer: W,
    limits: LimitsConfig,
    format: OutputFormat,
}

enum Flow {
    Continue,
    Stop,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, limits: LimitsConfig, format: OutputFormat) -> Self {
        Self {
            reader,
            writer,
            limits,
            format,
        }
    }

    pub fn run(mut self) -> Result<()> {
        let Some(edges) = self.next_line()? else {
            return Err(KiwilandError::invalid_graph("no edge list given"));
        };
        let graph = Graph::parse(&edges)?;
        tracing::debug!(nodes = graph.node_count(), "session started");

        let mut handled = 0usize;
        while let Some(line) = self.next_line()? {
            handled += 1;
            if let Flow::Stop = self.handle_line(&graph, &line)? {
                break;
            }
        }

        self.writer.flush()?;
        tracing::debug!(commands = handled, "session finished");
        Ok(())
    }

    /// Next non-empty trimmed line, or `None` at end of input
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            let line = buf.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    fn handle_line(&mut self, graph: &Graph, line: &str) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(line, error = %err, "rejected session line");
                self.write_error(&err)?;
                return Ok(Flow::Continue);
            }
        };

        let answer = match command {
            SessionCommand::Exit => return Ok(Flow::Stop),
            SessionCommand::Help => {
                writeln!(self.writer, "{SESSION_HELP}")?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Distance { route } => query::distance(graph, &route),
            SessionCommand::Shortest { from, to } => query::shortest(graph, &from, &to),
            SessionCommand::RoutesBelow { from, to, bound } => {
                query::routes_below(graph, &from, &to, bound, &self.limits)
            }
            SessionCommand::Trips { from, to, stops } => {
                query::trips(graph, &from, &to, stops, &self.limits)
            }
        };

        match answer {
            Ok(answer) => self.write_answer(&answer)?,
            Err(err) => self.write_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn write_answer(&mut self, answer: &Answer) -> Result<()> {
        writeln!(self.writer, "{}", answer.render(self.format, false)?)?;
        Ok(())
    }

    fn write_error(&mut self, err: &KiwilandError) -> Result<()> {
        writeln!(self.writer, "{}", render_error(err, self.format))?;
        Ok(())
    }
}
