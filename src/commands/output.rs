//! Rendering of query answers in human and JSON form

use kiwiland_core::error::{KiwilandError, Result};
use kiwiland_core::format::OutputFormat;
use serde_json::json;

/// Result of a single query, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A distance, with the node sequence when one was computed
    Distance {
        distance: u64,
        route: Option<Vec<String>>,
    },
    /// Matching routes, each rendered as `A-B-C`
    Routes(Vec<String>),
    /// Graph summary
    Info { nodes: Vec<String>, edges: usize },
}

impl Answer {
    /// Render the answer. `list` prints every route in human format.
    pub fn render(&self, format: OutputFormat, list: bool) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(self.render_human(list)),
            OutputFormat::Json => Ok(serde_json::to_string(&self.to_json())?),
        }
    }

    fn render_human(&self, list: bool) -> String {
        match self {
            Answer::Distance { distance, .. } => distance.to_string(),
            Answer::Routes(routes) => {
                let mut lines = vec![routes.len().to_string()];
                if list {
                    lines.extend(routes.iter().cloned());
                }
                lines.join("\n")
            }
            Answer::Info { nodes, edges } => {
                format!(
                    "nodes: {} ({})\nedges: {}",
                    nodes.len(),
                    nodes.join(", "),
                    edges
                )
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Answer::Distance { distance, route } => {
                let mut value = json!({ "distance": distance });
                if let Some(route) = route {
                    value["route"] = json!(route);
                }
                value
            }
            Answer::Routes(routes) => json!({
                "count": routes.len(),
                "routes": routes,
            }),
            Answer::Info { nodes, edges } => json!({
                "nodes": nodes.len(),
                "edges": edges,
                "names": nodes,
            }),
        }
    }
}

/// Render an error the way the chosen format expects
pub fn render_error(error: &KiwilandError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format!("{error}; type help for usage"),
        OutputFormat::Json => error.to_json().to_string(),
    }
}
