//! Test data fixtures for server tests.

#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use graph_editor_server::config::ServerConfig;
use graph_editor_server::protocol::ProtocolHandler;
use graph_editor_server::session::SessionManager;
use graph_editor_server::CommandRegistry;

/// Configuration with a fixed seed so random graphs repeat.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        seed: Some(42),
        ..ServerConfig::default()
    }
}

/// Create an untitled session manager for testing.
pub fn create_test_session() -> Arc<Mutex<SessionManager>> {
    Arc::new(Mutex::new(SessionManager::new(&test_config())))
}

/// A session holding the triangle A-B-C plus an isolated D.
pub async fn create_triangle_session() -> Arc<Mutex<SessionManager>> {
    let session = create_test_session();
    call(
        &session,
        "graph_batch",
        json!({"operations": [
            {"op": "add_vertex", "label": "A", "x": 100.0, "y": 100.0},
            {"op": "add_vertex", "label": "B", "x": 200.0, "y": 100.0},
            {"op": "add_vertex", "label": "C", "x": 150.0, "y": 200.0},
            {"op": "add_vertex", "label": "D", "x": 400.0, "y": 400.0},
            {"op": "add_edge", "from": "A", "to": "B"},
            {"op": "add_edge", "from": "B", "to": "C"},
            {"op": "add_edge", "from": "C", "to": "A"},
        ]}),
    )
    .await;
    session
}

/// Call a command that must succeed and return its value.
pub async fn call(session: &Arc<Mutex<SessionManager>>, name: &str, args: Value) -> Value {
    CommandRegistry::call(name, Some(args), session)
        .await
        .unwrap_or_else(|e| panic!("{name} failed: {e}"))
        .value
}

/// A handler that has completed the handshake.
pub async fn initialized_handler() -> ProtocolHandler {
    let handler = ProtocolHandler::new(create_test_session());
    let reply = handler
        .handle_line(
            &json!({
                "jsonrpc": "2.0",
                "id": 0,
                "method": "initialize",
                "params": {
                    "protocolVersion": "graph-editor/1",
                    "clientInfo": {"name": "tests", "version": "1.0"}
                }
            })
            .to_string(),
        )
        .await;
    assert!(reply.is_some());
    let none = handler
        .handle_line(r#"{"jsonrpc":"2.0","method":"initialized"}"#)
        .await;
    assert!(none.is_none());
    handler
}

/// Send a request line and return the reply.
pub async fn request(handler: &ProtocolHandler, id: i64, method: &str, params: Value) -> Value {
    let line = json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}).to_string();
    handler
        .handle_line(&line)
        .await
        .expect("requests always get a reply")
}
