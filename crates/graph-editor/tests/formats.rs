//! Minimal and extended text format tests.

use graph_editor::{decode, encode, Color, Format, GraphError, GraphSession, StyleConfig};

fn styled_graph() -> GraphSession {
    let mut session = GraphSession::new(StyleConfig::default());
    session.add_vertex("A", 10.0, 10.0).unwrap();

    let mut style = StyleConfig::default();
    style.vertex.fill = Color::rgb(0x1a, 0x2b, 0x3c);
    style.vertex.radius = 45;
    style.vertex.text_size = 20;
    style.vertex.font_name = "DejaVu Sans Mono".to_string();
    style.edge.color = Color::rgba(0xff, 0, 0, 0x80);
    style.edge.width = 3;
    session.set_style(style).unwrap();

    session.add_vertex("B", 20.5, -3.25).unwrap();
    session.add_edge("B", "A").unwrap();
    session.add_vertex("C", 0.1, 1e9).unwrap();
    session
}

fn assert_same_graph(left: &GraphSession, right: &GraphSession, with_styles: bool) {
    let lv: Vec<_> = left.vertices().collect();
    let rv: Vec<_> = right.vertices().collect();
    assert_eq!(lv.len(), rv.len());
    for (a, b) in lv.iter().zip(&rv) {
        assert_eq!(a.label(), b.label());
        assert_eq!(a.position, b.position);
        if with_styles {
            assert_eq!(a.style, b.style);
        }
    }

    assert_eq!(left.edge_count(), right.edge_count());
    for edge in left.edges() {
        let other = right.find_edge(edge.from(), edge.to()).expect("edge missing");
        if with_styles {
            assert_eq!(edge.style, other.style);
        }
    }
}

#[test]
fn test_minimal_encoding_example() {
    let mut session = GraphSession::new(StyleConfig::default());
    session.add_vertex("A", 10.0, 10.0).unwrap();
    session.add_vertex("B", 20.0, 20.0).unwrap();
    session.add_edge("A", "B").unwrap();

    let text = encode(&session, Format::Minimal);
    assert_eq!(text, "2 1\nA 10.0 10.0\nB 20.0 20.0\nA B\n");

    let decoded = decode(&text, Format::Minimal, &StyleConfig::default()).unwrap();
    assert_eq!(decoded.vertex_count(), 2);
    assert!(decoded.find_edge("B", "A").is_some());
    assert!(!decoded.is_dirty());
}

#[test]
fn test_minimal_round_trip() {
    let session = styled_graph();
    let text = encode(&session, Format::Minimal);
    let decoded = decode(&text, Format::Minimal, &StyleConfig::default()).unwrap();
    assert_same_graph(&session, &decoded, false);
}

#[test]
fn test_minimal_decode_uses_given_style() {
    let mut style = StyleConfig::default();
    style.vertex.radius = 99;
    let decoded = decode("1 0\nA 1.0 2.0\n", Format::Minimal, &style).unwrap();
    assert_eq!(decoded.vertex("A").unwrap().style.radius, 99);
}

#[test]
fn test_extended_encoding_layout() {
    let text = encode(&styled_graph(), Format::Extended);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "4",
            "V A 10.0 10.0 0xffff00ff 30 12 System Regular",
            "V B 20.5 -3.25 0x1a2b3cff 45 20 DejaVu Sans Mono",
            "E B A 0xff000080 3",
            "V C 0.1 1000000000.0 0x1a2b3cff 45 20 DejaVu Sans Mono",
        ]
    );
}

#[test]
fn test_extended_round_trip_keeps_styles_and_order() {
    let session = styled_graph();
    let text = encode(&session, Format::Extended);
    let decoded = decode(&text, Format::Extended, &StyleConfig::default()).unwrap();

    assert_same_graph(&session, &decoded, true);
    assert_eq!(session.entities(), decoded.entities());
    assert_eq!(encode(&decoded, Format::Extended), text);
}

#[test]
fn test_extended_accepts_edges_before_vertices() {
    let text = "3\nE A B 0x000000ff 1\nV A 1.0 1.0 0xffff00ff 30 12 Arial\nV B 2.0 2.0 #00ff00 30 12 Arial\n";
    let decoded = decode(text, Format::Extended, &StyleConfig::default()).unwrap();
    assert_eq!(decoded.edge_count(), 1);
    assert_eq!(decoded.vertex("B").unwrap().style.fill, Color::rgb(0, 255, 0));
    // creation order follows the file
    assert!(matches!(decoded.entities()[0], graph_editor::EntityId::Edge { .. }));
}

#[test]
fn test_dangling_edge_reference() {
    let err = decode("1 1\nA 1.0 1.0\nA X\n", Format::Minimal, &StyleConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GraphError::DanglingEdgeReference { line: 3, ref label } if label == "X"
    ));

    let err = decode(
        "2\nV A 1.0 1.0 0xffff00ff 30 12 Arial\nE A Q 0x000000ff 1\n",
        Format::Extended,
        &StyleConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::DanglingEdgeReference { line: 3, .. }));
}

#[test]
fn test_minimal_parse_errors() {
    let style = StyleConfig::default();
    let cases = [
        ("", 1),
        ("2\nA 1.0 1.0\n", 1),
        ("x 0\n", 1),
        ("2 0\nA 1.0 1.0\n", 3),
        ("1 0\nA 1.0\n", 2),
        ("1 0\nA one 1.0\n", 2),
        ("1 0\nA NaN 1.0\n", 2),
        ("2 0\nA 1.0 1.0\nA 2.0 2.0\n", 3),
        ("1 1\nA 1.0 1.0\nA A\n", 3),
        ("2 2\nA 1.0 1.0\nB 1.0 1.0\nA B\nB A\n", 5),
        ("1 0\nA 1.0 1.0\nB 2.0 2.0\n", 3),
    ];
    for (text, expected_line) in cases {
        match decode(text, Format::Minimal, &style) {
            Err(GraphError::ParseError { line, .. }) => {
                assert_eq!(line, expected_line, "wrong line for {text:?}")
            }
            other => panic!("expected parse error for {text:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_extended_parse_errors() {
    let style = StyleConfig::default();
    let cases = [
        "2\nV A 1.0 1.0 0xffff00ff 30 12 Arial\n",
        "1\nV A 1.0 1.0 0xffff00ff 30 12 Arial\nV B 1.0 1.0 0xffff00ff 30 12 Arial\n",
        "1\nX A 1.0 1.0\n",
        "1\nV A 1.0 1.0 yellow 30 12 Arial\n",
        "1\nV A 1.0 1.0 0xffff00ff 30 12\n",
        "1\nV A 1.0 1.0 0xffff00ff 1000 12 Arial\n",
        "3\nV A 1.0 1.0 0xffff00ff 30 12 Arial\nV B 1.0 1.0 0xffff00ff 30 12 Arial\nE A B 0x000000ff\n",
        "1 1\n",
    ];
    for text in cases {
        assert!(
            matches!(decode(text, Format::Extended, &style), Err(GraphError::ParseError { .. })),
            "expected parse error for {text:?}"
        );
    }
}

#[test]
fn test_blank_lines_are_ignored() {
    let decoded = decode("\n1 0\n\nA 1.0 1.0\n\n\n", Format::Minimal, &StyleConfig::default()).unwrap();
    assert_eq!(decoded.vertex_count(), 1);
}

#[test]
fn test_empty_graph_round_trip() {
    let session = GraphSession::new(StyleConfig::default());
    assert_eq!(encode(&session, Format::Minimal), "0 0\n");
    assert_eq!(encode(&session, Format::Extended), "0\n");
    assert!(decode("0 0\n", Format::Minimal, &StyleConfig::default())
        .unwrap()
        .is_empty());
    assert!(decode("0\n", Format::Extended, &StyleConfig::default())
        .unwrap()
        .is_empty());
}
