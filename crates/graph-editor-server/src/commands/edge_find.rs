//! `edge_find`: look up one edge, or every edge touching a vertex.

use graph_editor::GraphError;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
struct FindParams {
    from: String,
    to: Option<String>,
}

/// Return the command definition for edge_find.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "edge_find".to_string(),
        description: "Find the edge between two vertices, or all edges of one vertex when `to` is omitted"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "from": { "type": "string" },
                "to": { "type": "string" }
            },
            "required": ["from"]
        }),
        mutates: false,
    }
}

/// Execute the edge_find command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: FindParams = parse_args(args)?;

    match params.to {
        Some(to) => {
            let edge = session.graph().find_edge(&params.from, &to).cloned();
            let status = match edge {
                Some(_) => format!("Edge {} - {} exists", params.from, to),
                None => format!("No edge {} - {}", params.from, to),
            };
            session.record(status);
            Ok(json!({ "edge": edge }))
        }
        None => {
            if !session.graph().contains_vertex(&params.from) {
                return Err(GraphError::NotFound(format!("vertex \"{}\"", params.from)).into());
            }
            let edges: Vec<_> = session
                .graph()
                .edges_incident(&params.from)
                .into_iter()
                .cloned()
                .collect();
            session.record(format!(
                "Vertex {} has {} edge(s)",
                params.from,
                edges.len()
            ));
            Ok(json!({ "edges": edges }))
        }
    }
}
