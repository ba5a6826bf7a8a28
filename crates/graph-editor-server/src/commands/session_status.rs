//! `session_status`: title, save state and the last action.

use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "session_status".to_string(),
        description: "Report title, dirty flag, counts, file, format and last action"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
        mutates: false,
    }
}

/// Reports the status as it was before this call, so `last_action` is the
/// previous command's.
pub fn execute(_args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    Ok(session.status())
}
