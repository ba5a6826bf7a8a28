//! `graph_batch`: apply several edits as one.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::{BatchOp, SessionManager, Transaction};
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
struct BatchParams {
    operations: Vec<BatchOp>,
}

/// Return the command definition for graph_batch.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "graph_batch".to_string(),
        description: "Apply a list of vertex and edge operations; if one fails none are applied"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "operations": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "op": {
                                "type": "string",
                                "enum": ["add_vertex", "remove_vertex", "move_vertex", "add_edge", "remove_edge"]
                            },
                            "label": { "type": "string" },
                            "x": { "type": "number" },
                            "y": { "type": "number" },
                            "from": { "type": "string" },
                            "to": { "type": "string" }
                        },
                        "required": ["op"]
                    }
                }
            },
            "required": ["operations"]
        }),
        mutates: true,
    }
}

/// Execute the graph_batch command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: BatchParams = parse_args(args)?;
    let mut tx = Transaction::new(session);
    tx.extend(params.operations);
    let applied = tx.commit()?;

    session.record(format!("Applied {applied} operation(s)"));
    Ok(json!({ "applied": applied }))
}
