//! `file_open`: load a graph file into the session.

use std::path::PathBuf;

use graph_editor::Format;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Deserialize)]
struct OpenParams {
    path: PathBuf,
    /// Detected from the header when omitted.
    format: Option<Format>,
    #[serde(default)]
    force: bool,
}

/// Return the command definition for file_open.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "file_open".to_string(),
        description: "Open a graph file, replacing the current graph".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "format": { "type": "string", "enum": ["minimal", "extended"] },
                "force": { "type": "boolean", "default": false }
            },
            "required": ["path"]
        }),
        mutates: true,
    }
}

/// Execute the file_open command. The current graph survives a failed open.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: OpenParams = parse_args(args)?;
    session.open_file(&params.path, params.format, params.force)?;

    let graph = session.graph();
    let value = json!({
        "path": params.path.display().to_string(),
        "format": graph.format(),
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
    });
    session.record(format!("Opened {}", params.path.display()));
    Ok(value)
}
