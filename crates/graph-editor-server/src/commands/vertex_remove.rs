//! `vertex_remove`: delete a vertex and its incident edges.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
struct RemoveParams {
    label: String,
}

/// Return the command definition for vertex_remove.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "vertex_remove".to_string(),
        description: "Remove a vertex; its incident edges are removed first".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "label": { "type": "string" }
            },
            "required": ["label"]
        }),
        mutates: true,
    }
}

/// Execute the vertex_remove command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: RemoveParams = parse_args(args)?;
    let removed = session.graph_mut().remove_vertex(&params.label)?;

    session.record(format!(
        "Removed vertex {} and {} edge(s)",
        params.label,
        removed.len()
    ));
    Ok(json!({
        "label": params.label,
        "removed_edges": removed,
    }))
}
