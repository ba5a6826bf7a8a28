//! Files written through the protocol load in the core library, and the
//! reverse.

use std::sync::Arc;
use tokio::sync::Mutex;

use graph_editor::{decode, encode, load_from_file, Format, GraphSession, StyleConfig};
use graph_editor_server::config::ServerConfig;
use graph_editor_server::types::{Message, Notification, Request, RequestId};
use graph_editor_server::{ProtocolHandler, SessionManager};
use serde_json::{json, Value};
use tempfile::tempdir;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn create_handler() -> ProtocolHandler {
    let session = SessionManager::new(&ServerConfig::default());
    ProtocolHandler::new(Arc::new(Mutex::new(session)))
}

async fn init_handler(handler: &ProtocolHandler) {
    let init = Request::new(
        0i64,
        "initialize",
        Some(json!({
            "protocolVersion": "graph-editor/1",
            "clientInfo": {"name": "bridge", "version": "1.0"}
        })),
    );
    handler.handle_message(Message::Request(init)).await;
    handler
        .handle_message(Message::Notification(Notification::new("initialized", None)))
        .await;
}

async fn call(handler: &ProtocolHandler, name: &str, args: Value) -> Value {
    let request = Request::new(
        RequestId::Number(1),
        "commands/call",
        Some(json!({"name": name, "arguments": args})),
    );
    handler
        .handle_message(Message::Request(request))
        .await
        .expect("requests get a reply")
}

fn value(reply: &Value) -> &Value {
    assert!(reply.get("error").is_none(), "unexpected error: {reply}");
    &reply["result"]["value"]
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_protocol_save_loads_in_core() {
    let dir = tempdir().unwrap();
    let handler = create_handler();
    init_handler(&handler).await;

    for (label, x, y) in [("A", 10.0, 10.0), ("B", 20.0, 20.0), ("C", 30.5, -4.25)] {
        value(&call(&handler, "vertex_add", json!({"label": label, "x": x, "y": y})).await);
    }
    value(&call(&handler, "edge_add", json!({"from": "A", "to": "B"})).await);
    value(&call(&handler, "edge_add", json!({"from": "C", "to": "B"})).await);

    for format in ["minimal", "extended"] {
        let path = dir.path().join(format!("g.{format}"));
        let reply = call(
            &handler,
            "file_save",
            json!({"path": path.display().to_string(), "format": format}),
        )
        .await;
        assert_eq!(value(&reply)["format"], format);

        let graph = load_from_file(&path, None, &StyleConfig::default()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.find_edge("B", "C").is_some());
        assert_eq!(graph.vertex("C").unwrap().position.y, -4.25);
        assert!(!graph.is_dirty());
    }
}

#[tokio::test]
async fn test_core_file_opens_through_protocol() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("core.txt");

    let mut graph = GraphSession::new(StyleConfig::default());
    graph.add_vertex("A", 1.0, 2.0).unwrap();
    graph.add_vertex("B", 3.0, 4.0).unwrap();
    graph.add_edge("B", "A").unwrap();
    graph.save_as(&path, Format::Extended).unwrap();

    let handler = create_handler();
    init_handler(&handler).await;
    let opened = call(&handler, "file_open", json!({"path": path.display().to_string()})).await;
    assert_eq!(value(&opened)["format"], "extended");

    let view = call(&handler, "graph_view", json!({})).await;
    let view = value(&view);
    assert_eq!(view["title"], "core.txt - Graph Editor");
    assert_eq!(view["order"], json!([["V", "A"], ["V", "B"], ["E", "A", "B"]]));
    assert_eq!(view["edges"][0]["from"], "B");
}

#[tokio::test]
async fn test_random_graph_survives_both_formats() {
    let handler = create_handler();
    init_handler(&handler).await;
    value(&call(&handler, "graph_random", json!({"seed": 2024, "min_vertices": 8, "max_vertices": 12})).await);

    let session = handler.session().lock().await;
    let graph = session.graph();
    for format in [Format::Minimal, Format::Extended] {
        let text = encode(graph, format);
        let decoded = decode(&text, format, graph.style()).unwrap();
        assert_eq!(decoded.vertex_count(), graph.vertex_count());
        assert_eq!(decoded.edge_count(), graph.edge_count());
        for edge in graph.edges() {
            assert!(decoded.find_edge(edge.from(), edge.to()).is_some());
        }
        for vertex in graph.vertices() {
            let other = decoded.vertex(vertex.label()).unwrap();
            assert_eq!(other.position, vertex.position);
        }
        assert_eq!(encode(&decoded, format), text);
    }
}
