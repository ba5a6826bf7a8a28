//! `file_new`: start an untitled, empty session.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

use super::parse_args;

#[derive(Debug, Default, Deserialize)]
pub(super) struct ForceParams {
    #[serde(default)]
    pub force: bool,
}

/// Return the command definition for file_new.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "file_new".to_string(),
        description: "Discard the graph and start an untitled session".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "force": {
                    "type": "boolean",
                    "default": false,
                    "description": "Discard unsaved changes"
                }
            }
        }),
        mutates: true,
    }
}

/// Execute the file_new command.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let params: ForceParams = parse_args(args)?;
    session.new_file(params.force)?;

    session.record("New graph");
    Ok(json!({ "title": session.graph().title() }))
}
