//! Command results and definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a `commands/call` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Structured payload for the presentation layer.
    pub value: Value,
    /// One-line status text, the "last action" shown to users.
    pub status: String,
    /// Session title after the command (`name*` when dirty).
    pub title: String,
    pub dirty: bool,
}

/// Command definition for `commands/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name (unique).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for the arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    /// Whether the command can change the graph.
    pub mutates: bool,
}

/// Result from `commands/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandListResult {
    pub commands: Vec<CommandDefinition>,
}
