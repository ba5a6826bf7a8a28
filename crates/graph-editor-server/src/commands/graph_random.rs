//! `graph_random`: replace the graph with a random one.

use graph_editor::{Bounds, RandomGraphSpec};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RandomParams {
    min_vertices: Option<usize>,
    max_vertices: Option<usize>,
    bounds: Option<Bounds>,
    seed: Option<u64>,
}

/// Return the command definition for graph_random.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "graph_random".to_string(),
        description: "Clear the graph and generate random vertices and edges".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "min_vertices": { "type": "integer", "minimum": 1 },
                "max_vertices": { "type": "integer", "minimum": 1, "maximum": 1000 },
                "bounds": {
                    "type": "object",
                    "properties": {
                        "min_x": { "type": "number" },
                        "max_x": { "type": "number" },
                        "min_y": { "type": "number" },
                        "max_y": { "type": "number" }
                    }
                },
                "seed": { "type": "integer", "description": "Reproducible generation" }
            }
        }),
        mutates: true,
    }
}

/// Execute the graph_random command. Omitted fields fall back to the
/// configured random spec.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: RandomParams = parse_args(args)?;

    let base = *session.random_spec();
    let spec = RandomGraphSpec {
        min_vertices: params.min_vertices.unwrap_or(base.min_vertices),
        max_vertices: params.max_vertices.unwrap_or(base.max_vertices),
        bounds: params.bounds.unwrap_or(base.bounds),
    };
    let summary = session.generate_random(Some(spec), params.seed)?;

    session.record(format!(
        "Generated random graph with {} vertices and {} edges",
        summary.vertices, summary.edges
    ));
    Ok(json!(summary))
}
