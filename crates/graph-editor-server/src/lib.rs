//! Graph Editor server: a headless command/query surface for graph sessions.
//!
//! A presentation layer (GUI, script, test harness) talks line-delimited
//! JSON-RPC 2.0 to this server, which owns exactly one
//! [`GraphSession`](graph_editor::GraphSession) and applies the commands to it.

pub mod commands;
pub mod config;
pub mod protocol;
pub mod session;
pub mod transport;
pub mod types;

pub use commands::CommandRegistry;
pub use config::ServerConfig;
pub use protocol::ProtocolHandler;
pub use session::SessionManager;
pub use transport::StdioTransport;
