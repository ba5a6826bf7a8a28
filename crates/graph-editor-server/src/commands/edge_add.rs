//! `edge_add`: connect two vertices.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
pub(super) struct EdgeParams {
    pub from: String,
    pub to: String,
}

/// Return the command definition for edge_add.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "edge_add".to_string(),
        description: "Add an undirected edge between two existing vertices".to_string(),
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

/// Execute the edge_add command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: EdgeParams = parse_args(args)?;
    let edge = session.graph_mut().add_edge(&params.from, &params.to)?;
    let value = json!(edge);

    session.record(format!("Added edge {} - {}", params.from, params.to));
    Ok(value)
}
