//! Wire type serialization and error mapping.

use graph_editor::GraphError;
use serde_json::json;

use graph_editor_server::types::{
    codes, CommandCallParams, ErrorResponse, Message, Request, RequestId, Response, ServerError,
};

#[test]
fn test_message_variants() {
    let request: Message =
        serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})).unwrap();
    assert!(matches!(request, Message::Request(ref r) if r.id == RequestId::Number(1)));

    let notification: Message =
        serde_json::from_value(json!({"jsonrpc": "2.0", "method": "initialized"})).unwrap();
    assert!(matches!(notification, Message::Notification(_)));

    let response: Message =
        serde_json::from_value(json!({"jsonrpc": "2.0", "id": "x", "result": null})).unwrap();
    assert!(matches!(response, Message::Response(_)));
}

#[test]
fn test_request_serialization_skips_missing_params() {
    let value = serde_json::to_value(Request::new(7i64, "ping", None)).unwrap();
    assert_eq!(value, json!({"jsonrpc": "2.0", "id": 7, "method": "ping"}));

    let value = serde_json::to_value(Response::new("a".into(), json!({"ok": true}))).unwrap();
    assert_eq!(value["id"], "a");
}

#[test]
fn test_call_params_arguments_are_optional() {
    let params: CommandCallParams = serde_json::from_value(json!({"name": "graph_view"})).unwrap();
    assert_eq!(params.name, "graph_view");
    assert!(params.arguments.is_none());
}

#[test]
fn test_graph_errors_map_to_application_codes() {
    let cases = [
        (GraphError::DuplicateLabel("A".into()), codes::DUPLICATE_LABEL),
        (GraphError::NotFound("A".into()), codes::NOT_FOUND),
        (GraphError::MissingVertex("A".into()), codes::MISSING_VERTEX),
        (GraphError::SelfLoop("A".into()), codes::SELF_LOOP),
        (
            GraphError::DuplicateEdge("A".into(), "B".into()),
            codes::DUPLICATE_EDGE,
        ),
        (GraphError::Untitled, codes::PERSISTENCE),
        (
            GraphError::InvalidPosition {
                x: f64::NAN,
                y: 0.0,
            },
            codes::INVALID_VALUE,
        ),
    ];
    for (err, code) in cases {
        let kind = err.kind();
        let server = ServerError::from(err);
        assert_eq!(server.code(), code);
        let object = server.to_error_object();
        assert_eq!(object.data.unwrap()["kind"], kind);
    }
}

#[test]
fn test_error_response_shape() {
    let err = ServerError::MethodNotFound("x".into());
    let value = serde_json::to_value(ErrorResponse::new(RequestId::Null, err.to_error_object()))
        .unwrap();
    assert_eq!(value["id"], serde_json::Value::Null);
    assert_eq!(value["error"]["code"], codes::METHOD_NOT_FOUND);
    assert_eq!(value["error"]["message"], "method not found: x");
}
