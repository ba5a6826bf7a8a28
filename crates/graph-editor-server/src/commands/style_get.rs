//! `style_get`: the style given to new entities.

use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerResult};

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "style_get".to_string(),
        description: "Return the vertex and edge style applied to new entities".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
        mutates: false,
    }
}

pub fn execute(_args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    let value = json!(session.graph().style());
    session.record("Read style settings");
    Ok(value)
}
