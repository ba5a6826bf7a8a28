//! Handshake types.

use serde::{Deserialize, Serialize};

/// Protocol revision spoken by this server.
pub const PROTOCOL_VERSION: &str = "graph-editor/1";

/// Server name constant.
pub const SERVER_NAME: &str = "graph-editor-server";

/// Server version constant.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name and version of either peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
    pub name: String,
    pub version: String,
}

/// `initialize` params sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    pub client_info: Implementation,
}

/// What the server offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// Number of commands reachable through `commands/call`.
    pub commands: usize,
    /// File formats `file_open` / `file_save` understand.
    pub formats: Vec<String>,
    /// Whether `graph_batch` applies operations all-or-nothing.
    pub transactions: bool,
}

/// `initialize` result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    pub server_info: Implementation,
}

impl InitializeResult {
    pub fn for_commands(commands: usize) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                commands,
                formats: vec!["minimal".to_string(), "extended".to_string()],
                transactions: true,
            },
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        }
    }
}
