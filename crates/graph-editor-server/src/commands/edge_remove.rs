//! `edge_remove`: disconnect two vertices.

use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::edge_add::EdgeParams;
use super::parse_args;

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "edge_remove".to_string(),
        description: "Remove the edge between two vertices, in either orientation".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "from": { "type": "string" },
                "to": { "type": "string" }
            },
            "required": ["from", "to"]
        }),
        mutates: true,
    }
}

pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: EdgeParams = parse_args(args)?;
    let edge = session.graph_mut().remove_edge(&params.from, &params.to)?;

    session.record(format!("Removed edge {} - {}", params.from, params.to));
    Ok(json!(edge))
}
