//! `style_set`: change the style of entities created from now on.

use graph_editor::StyleConfig;
use serde_json::{json, Value};

use crate::session::SessionManager;
use crate::types::{CommandDefinition, ServerError, ServerResult};

/// Return the command definition for style_set.
pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: "style_set".to_string(),
        description: "Update style settings for new vertices and edges; existing ones keep theirs"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "vertex": {
                    "type": "object",
                    "properties": {
                        "fill": { "type": "string", "description": "0xrrggbbaa or #rrggbb" },
                        "radius": { "type": "integer", "minimum": 20, "maximum": 200 },
                        "font_name": { "type": "string" },
                        "text_size": { "type": "integer", "minimum": 12, "maximum": 50 }
                    }
                },
                "edge": {
                    "type": "object",
                    "properties": {
                        "color": { "type": "string" },
                        "width": { "type": "integer", "minimum": 1, "maximum": 5 }
                    }
                }
            }
        }),
        mutates: false,
    }
}

/// Execute the style_set command. Only the given fields change.
pub fn execute(args: Value, session: &mut SessionManager) -> ServerResult<Value> {
    if !args.is_object() {
        return Err(ServerError::InvalidParams(
            "style_set expects an object".to_string(),
        ));
    }

    let mut merged = serde_json::to_value(session.graph().style())
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    merge(&mut merged, args);
    let style: StyleConfig = serde_json::from_value(merged)
        .map_err(|e| ServerError::InvalidParams(e.to_string()))?;
    session.graph_mut().set_style(style)?;

    let value = json!(session.graph().style());
    session.record("Updated style settings");
    Ok(value)
}

fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) if existing.is_object() => merge(existing, value),
                    _ => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_only_given_leaves() {
        let mut target = json!({"vertex": {"radius": 30, "fill": "a"}, "edge": {"width": 1}});
        merge(&mut target, json!({"vertex": {"radius": 40}}));
        assert_eq!(
            target,
            json!({"vertex": {"radius": 40, "fill": "a"}, "edge": {"width": 1}})
        );
    }
}
