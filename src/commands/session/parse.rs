//! Grammar of the line-oriented session commands

use std::sync::OnceLock;

use regex::Regex;

use crate::commands::query::TripStops;
use kiwiland_core::bail_usage;
use kiwiland_core::error::Result;

const DISTANCE_PREFIX: &str = "distance of route";
const SHORTEST_PREFIX: &str = "shortest route";
const ROUTES_PREFIX: &str = "all routes";
const TRIPS_PREFIX: &str = "all trips";

static DISTANCE_RE: OnceLock<Regex> = OnceLock::new();
static SHORTEST_RE: OnceLock<Regex> = OnceLock::new();
static ROUTES_RE: OnceLock<Regex> = OnceLock::new();
static TRIPS_RE: OnceLock<Regex> = OnceLock::new();

fn distance_re() -> &'static Regex {
    DISTANCE_RE.get_or_init(|| {
        Regex::new(r"^distance of route\s+(\S+)$").expect("Invalid distance command pattern")
    })
}

fn shortest_re() -> &'static Regex {
    SHORTEST_RE.get_or_init(|| {
        Regex::new(r"^shortest route\s+(\S+)\s+(\S+)$").expect("Invalid shortest command pattern")
    })
}

fn routes_re() -> &'static Regex {
    ROUTES_RE.get_or_init(|| {
        Regex::new(r"^all routes\s+(\S+)\s+(\S+)\s+distance\s*<\s*([0-9]+)$")
            .expect("Invalid routes command pattern")
    })
}

fn trips_re() -> &'static Regex {
    TRIPS_RE.get_or_init(|| {
        Regex::new(r"^all trips\s+(\S+)\s+(\S+)\s+steps\s*(<=|=)\s*([0-9]+)$")
            .expect("Invalid trips command pattern")
    })
}

/// One parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Distance { route: String },
    Shortest { from: String, to: String },
    RoutesBelow { from: String, to: String, bound: u64 },
    Trips { from: String, to: String, stops: TripStops },
    Help,
    Exit,
}

/// Parse one trimmed, non-empty session line
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    match line {
        "help" => return Ok(SessionCommand::Help),
        "exit" => return Ok(SessionCommand::Exit),
        _ => {}
    }

    if let Some(caps) = distance_re().captures(line) {
        return Ok(SessionCommand::Distance {
            route: caps[1].to_string(),
        });
    }

    if let Some(caps) = shortest_re().captures(line) {
        return Ok(SessionCommand::Shortest {
            from: caps[1].to_string(),
            to: caps[2].to_string(),
        });
    }

    if let Some(caps) = routes_re().captures(line) {
        return Ok(SessionCommand::RoutesBelow {
            from: caps[1].to_string(),
            to: caps[2].to_string(),
            bound: parse_number(&caps[3])?,
        });
    }

    if let Some(caps) = trips_re().captures(line) {
        let count = parse_number(&caps[4])?;
        let stops = if &caps[3] == "=" {
            TripStops::Exact(count)
        } else {
            TripStops::AtMost(count)
        };
        return Ok(SessionCommand::Trips {
            from: caps[1].to_string(),
            to: caps[2].to_string(),
            stops,
        });
    }

    let expected = [
        (DISTANCE_PREFIX, "distance of route A-B-C"),
        (SHORTEST_PREFIX, "shortest route X Y"),
        (ROUTES_PREFIX, "all routes X Y distance < N"),
        (TRIPS_PREFIX, "all trips X Y steps = N | all trips X Y steps <= N"),
    ];
    for (prefix, usage) in expected {
        if line.starts_with(prefix) {
            bail_usage!(format!("malformed command, expected: {usage}"));
        }
    }
    bail_usage!("unknown command")
}

fn parse_number<T: std::str::FromStr>(digits: &str) -> Result<T> {
    match digits.parse() {
        Ok(value) => Ok(value),
        Err(_) => bail_usage!(format!("number out of range: {digits}")),
    }
}
