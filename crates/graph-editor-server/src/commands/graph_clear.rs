//! `graph_clear`: remove every vertex and edge.

use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "graph_clear".to_string(),
        description: "Remove all vertices and edges; the file and save state are kept"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
        mutates: true,
    }
}

pub fn execute(_args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let graph = session.graph_mut();
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    graph.clear();

    session.record("Cleared graph");
    Ok(json!({
        "removed_vertices": vertices,
        "removed_edges": edges,
    }))
}
