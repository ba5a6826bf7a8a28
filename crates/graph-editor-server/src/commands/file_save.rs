//! `file_save`: save, or save as when a path is given.

use std::path::PathBuf;

use graph_editor::Format;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Default, Deserialize)]
struct SaveParams {
    path: Option<PathBuf>,
    format: Option<Format>,
}

/// Return the command definition for file_save.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "file_save".to_string(),
        description: "Save to the current file, or to `path` (save as)".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "format": { "type": "string", "enum": ["minimal", "extended"] }
            }
        }),
        mutates: false,
    }
}

/// Execute the file_save command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: SaveParams = parse_args(args)?;

    let path = match (params.path, params.format) {
        (Some(path), format) => session.save_as(&path, format)?,
        (None, Some(format)) => {
            let path = session
                .graph()
                .current_file()
                .map(|p| p.to_path_buf())
                .ok_or(graph_editor::GraphError::Untitled)?;
            session.save_as(&path, Some(format))?
        }
        (None, None) => session.save()?,
    };

    let format = session.graph().format();
    session.record(format!("Saved {}", path.display()));
    Ok(json!({
        "path": path.display().to_string(),
        "format": format,
        "saved_at": session.last_saved().map(|t| t.to_rfc3339()),
    }))
}
