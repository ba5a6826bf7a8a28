//! `file_close`: close the current file.

use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::file_new::ForceParams;
use super::parse_args;

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "file_close".to_string(),
        description: "Close the current file; refused while there are unsaved changes unless forced"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "force": { "type": "boolean", "default": false }
            }
        }),
        mutates: true,
    }
}

pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: ForceParams = parse_args(args)?;
    let closed = session
        .graph()
        .current_file()
        .map(|p| p.display().to_string());
    session.new_file(params.force)?;

    session.record(match &closed {
        Some(path) => format!("Closed {path}"),
        None => "Closed untitled graph".to_string(),
    });
    Ok(json!({ "closed": closed }))
}
