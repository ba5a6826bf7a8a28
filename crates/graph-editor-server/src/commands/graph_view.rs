//! `graph_view`: everything a canvas needs to draw the graph.

use graph_editor::EntityId;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

/// Return the command definition for graph_view.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "graph_view".to_string(),
        description: "Return vertices and edges with their styles, in creation order"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
        mutates: false,
    }
}

/// Execute the graph_view command.
pub fn execute(_args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let graph = session.graph();
    let vertices: Vec<Value> = graph.vertices().map(|v| json!(v)).collect();
    let edges: Vec<Value> = graph.edges().iter().map(|e| json!(e)).collect();
    let order: Vec<Value> = graph
        .entities()
        .iter()
        .map(|id| match id {
            EntityId::Vertex { label } => json!(["V", label]),
            EntityId::Edge { key } => {
                let (a, b) = key.endpoints();
                json!(["E", a, b])
            }
        })
        .collect();

    let value = json!({
        "title": graph.title(),
        "vertices": vertices,
        "edges": edges,
        "order": order,
    });
    let status = format!(
        "Showing {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    session.record(status);
    Ok(value)
}
