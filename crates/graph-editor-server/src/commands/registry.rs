//! Command registration and dispatch.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::Value;

use crate::session::SessionManager;
use crate::types::{CommandDefinition, CommandResult, ServerError, ServerResult};

use super::{
    edge_add, edge_find, edge_remove, file_close, file_new, file_open, file_save, graph_batch,
    graph_clear, graph_random, graph_view, session_status, style_get, style_set, vertex_add,
    vertex_move, vertex_remove,
};

/// Registry of all available commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// List all available command definitions.
    pub fn list_commands() -> Vec<CommandDefinition> {
        vec![
            vertex_add::definition(),
            vertex_remove::definition(),
            vertex_move::definition(),
            edge_add::definition(),
            edge_remove::definition(),
            edge_find::definition(),
            graph_view::definition(),
            graph_clear::definition(),
            graph_random::definition(),
            graph_batch::definition(),
            style_get::definition(),
            style_set::definition(),
            file_new::definition(),
            file_open::definition(),
            file_save::definition(),
            file_close::definition(),
            session_status::definition(),
        ]
    }

    /// Run a command with the session locked for its whole duration.
    ///
    /// Failures are recorded as the last action before being returned.
    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        session: &Arc<Mutex<SessionManager>>,
    ) -> ServerResult<CommandResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));
        let mut session = session.lock().await;

        let outcome = match name {
            "vertex_add" => vertex_add::execute(args, &mut session),
            "vertex_remove" => vertex_remove::execute(args, &mut session),
            "vertex_move" => vertex_move::execute(args, &mut session),
            "edge_add" => edge_add::execute(args, &mut session),
            "edge_remove" => edge_remove::execute(args, &mut session),
            "edge_find" => edge_find::execute(args, &mut session),
            "graph_view" => graph_view::execute(args, &mut session),
            "graph_clear" => graph_clear::execute(args, &mut session),
            "graph_random" => graph_random::execute(args, &mut session),
            "graph_batch" => graph_batch::execute(args, &mut session),
            "style_get" => style_get::execute(args, &mut session),
            "style_set" => style_set::execute(args, &mut session),
            "file_new" => file_new::execute(args, &mut session),
            "file_open" => file_open::execute(args, &mut session),
            "file_save" => file_save::execute(args, &mut session),
            "file_close" => file_close::execute(args, &mut session),
            "session_status" => session_status::execute(args, &mut session),
            _ => return Err(ServerError::CommandNotFound(name.to_string())),
        };

        match outcome {
            Ok(value) => Ok(CommandResult {
                value,
                status: session.last_action().to_string(),
                title: session.graph().title(),
                dirty: session.graph().is_dirty(),
            }),
            Err(err) => {
                tracing::warn!("Command {name} failed: {err}");
                session.record(format!("{name} failed: {err}"));
                Err(err)
            }
        }
    }
}
