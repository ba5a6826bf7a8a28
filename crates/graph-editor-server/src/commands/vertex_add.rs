//! `vertex_add`: place a new vertex.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
struct AddParams {
    label: String,
    x: f64,
    y: f64,
}

/// Return the command definition for vertex_add.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "vertex_add".to_string(),
        description: "Add a vertex with a unique label at the given position".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "label": { "type": "string", "description": "Unique, no whitespace" },
                "x": { "type": "number" },
                "y": { "type": "number" }
            },
            "required": ["label", "x", "y"]
        }),
        mutates: true,
    }
}

/// Execute the vertex_add command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: AddParams = parse_args(args)?;

    let vertex = session
        .graph_mut()
        .add_vertex(&params.label, params.x, params.y)?;
    let value = json!(vertex);

    session.record(format!(
        "Added vertex {} at ({}, {})",
        params.label, params.x, params.y
    ));
    Ok(value)
}
