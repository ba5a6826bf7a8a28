//! Stress tests: many edits from concurrent clients against one session.

use std::sync::Arc;
use tokio::sync::Mutex;

use graph_editor::{load_from_file, EntityId, StyleConfig};
use graph_editor_server::config::ServerConfig;
use graph_editor_server::{CommandRegistry, SessionManager};
use serde_json::json;
use tempfile::tempdir;

fn shared_session() -> Arc<Mutex<SessionManager>> {
    let config = ServerConfig {
        seed: Some(7),
        ..ServerConfig::default()
    };
    Arc::new(Mutex::new(SessionManager::new(&config)))
}

fn check_invariants(session: &SessionManager) {
    let graph = session.graph();
    for edge in graph.edges() {
        assert_ne!(edge.from(), edge.to(), "self loop");
        assert!(graph.contains_vertex(edge.from()));
        assert!(graph.contains_vertex(edge.to()));
    }
    let mut keys: Vec<_> = graph.edges().iter().map(|e| e.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), graph.edge_count(), "parallel edges");

    let order = graph.entities();
    assert_eq!(order.len(), graph.vertex_count() + graph.edge_count());
    let vertices = order
        .iter()
        .filter(|id| matches!(id, EntityId::Vertex { .. }))
        .count();
    assert_eq!(vertices, graph.vertex_count());
}

#[tokio::test]
async fn test_concurrent_clients_keep_graph_consistent() {
    let session = shared_session();
    let mut tasks = Vec::new();

    for client in 0..8u32 {
        let session = session.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..50u32 {
                let label = format!("c{client}v{i}");
                let x = f64::from(i * 10);
                CommandRegistry::call(
                    "vertex_add",
                    Some(json!({"label": label, "x": x, "y": f64::from(client)})),
                    &session,
                )
                .await
                .unwrap();

                if i > 0 {
                    let prev = format!("c{client}v{}", i - 1);
                    CommandRegistry::call(
                        "edge_add",
                        Some(json!({"from": prev, "to": label})),
                        &session,
                    )
                    .await
                    .unwrap();
                }
                if i % 7 == 6 {
                    CommandRegistry::call(
                        "vertex_remove",
                        Some(json!({"label": format!("c{client}v{}", i - 3)})),
                        &session,
                    )
                    .await
                    .unwrap();
                }
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let guard = session.lock().await;
    check_invariants(&guard);
    // 50 added, 7 removed per client
    assert_eq!(guard.graph().vertex_count(), 8 * 43);
}

#[tokio::test]
async fn test_failed_batches_leave_no_trace() {
    let session = shared_session();
    CommandRegistry::call(
        "graph_random",
        Some(json!({"min_vertices": 20, "max_vertices": 20})),
        &session,
    )
    .await
    .unwrap();
    let before = {
        let guard = session.lock().await;
        check_invariants(&guard);
        graph_editor::encode(guard.graph(), graph_editor::Format::Extended)
    };

    for i in 0..100 {
        let ops = json!([
            {"op": "add_vertex", "label": format!("x{i}"), "x": 0.0, "y": 0.0},
            {"op": "add_edge", "from": format!("x{i}"), "to": "1"},
            {"op": "remove_vertex", "label": "2"},
            {"op": "add_edge", "from": "1", "to": "1"},
        ]);
        let err = CommandRegistry::call("graph_batch", Some(json!({"operations": ops})), &session)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "SelfLoop");
    }

    let guard = session.lock().await;
    check_invariants(&guard);
    assert_eq!(
        graph_editor::encode(guard.graph(), graph_editor::Format::Extended),
        before
    );
}

#[tokio::test]
async fn test_many_random_graphs_round_trip_through_files() {
    let dir = tempdir().unwrap();
    let session = shared_session();

    for seed in 0..25u64 {
        let path = dir.path().join(format!("r{seed}.txt"));
        CommandRegistry::call("graph_random", Some(json!({"seed": seed})), &session)
            .await
            .unwrap();
        CommandRegistry::call(
            "file_save",
            Some(json!({"path": path.display().to_string()})),
            &session,
        )
        .await
        .unwrap();

        let guard = session.lock().await;
        check_invariants(&guard);
        let loaded = load_from_file(&path, None, &StyleConfig::default()).unwrap();
        assert_eq!(loaded.vertex_count(), guard.graph().vertex_count());
        assert_eq!(loaded.edge_count(), guard.graph().edge_count());
    }
}
