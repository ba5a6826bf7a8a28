//! `<vertices> <edges>` header, then `label x y` and `from to` lines.

use std::fmt::Write;

use super::{at_line, content_lines, format_number, parse_coordinate, parse_count};
use crate::error::{GraphError, GraphResult};
use crate::model::Point;
use crate::session::GraphSession;
use crate::style::StyleConfig;

pub(super) fn encode(session: &GraphSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", session.vertex_count(), session.edge_count());
    for vertex in session.vertices() {
        let _ = writeln!(
            out,
            "{} {} {}",
            vertex.label(),
            format_number(vertex.position.x),
            format_number(vertex.position.y)
        );
    }
    for edge in session.edges() {
        let _ = writeln!(out, "{} {}", edge.from(), edge.to());
    }
    out
}

pub(super) fn decode(text: &str, style: &StyleConfig) -> GraphResult<GraphSession> {
    let mut lines = content_lines(text);
    let (header_line, header) = lines
        .next()
        .ok_or_else(|| GraphError::parse(1, "file is empty"))?;

    let fields: Vec<&str> = header.split_whitespace().collect();
    let [vertices, edges] = fields[..] else {
        return Err(GraphError::parse(
            header_line,
            format!("header needs 2 fields, found {}", fields.len()),
        ));
    };
    let vertex_count = parse_count(vertices, header_line, "vertex count")?;
    let edge_count = parse_count(edges, header_line, "edge count")?;

    let mut session = GraphSession::new(style.clone());
    let mut last_line = header_line;

    for _ in 0..vertex_count {
        let (line, content) = lines
            .next()
            .ok_or_else(|| GraphError::parse(last_line + 1, "expected a vertex line"))?;
        last_line = line;
        let fields: Vec<&str> = content.split_whitespace().collect();
        let [label, x, y] = fields[..] else {
            return Err(GraphError::parse(
                line,
                format!("vertex line needs 3 fields, found {}", fields.len()),
            ));
        };
        let position = Point::new(parse_coordinate(x, line)?, parse_coordinate(y, line)?);
        session
            .insert_vertex(label, position, style.vertex.clone())
            .map_err(|e| at_line(line, e))?;
    }

    for _ in 0..edge_count {
        let (line, content) = lines
            .next()
            .ok_or_else(|| GraphError::parse(last_line + 1, "expected an edge line"))?;
        last_line = line;
        let fields: Vec<&str> = content.split_whitespace().collect();
        let [from, to] = fields[..] else {
            return Err(GraphError::parse(
                line,
                format!("edge line needs 2 fields, found {}", fields.len()),
            ));
        };
        session
            .insert_edge(from, to, style.edge.clone())
            .map_err(|e| at_line(line, e))?;
    }

    if let Some((line, _)) = lines.next() {
        return Err(GraphError::parse(line, "unexpected content after the last edge"));
    }

    Ok(session)
}
