//! `vertex_move`: reposition a vertex.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
struct MoveParams {
    label: String,
    x: f64,
    y: f64,
}

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "vertex_move".to_string(),
        description: "Move a vertex to a new position".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "label": { "type": "string" },
                "x": { "type": "number" },
                "y": { "type": "number" }
            },
            "required": ["label", "x", "y"]
        }),
        mutates: true,
    }
}

pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: MoveParams = parse_args(args)?;

    let vertex = session
        .graph_mut()
        .move_vertex(&params.label, params.x, params.y)?;
    let value = json!(vertex);

    session.record(format!(
        "Moved vertex {} to ({}, {})",
        params.label, params.x, params.y
    ));
    Ok(value)
}
