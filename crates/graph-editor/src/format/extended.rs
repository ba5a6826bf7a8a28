//! `<entities>` header, then tagged lines in creation order:
//!
//! ```text
//! V <label> <x> <y> <color> <radius> <textSize> <fontName...>
//! E <from> <to> <color> <width>
//! ```

use std::fmt::Write;

use super::{at_line, content_lines, format_number, parse_coordinate, parse_count};
use crate::error::{GraphError, GraphResult};
use crate::model::{EdgeKey, EntityId, Point};
use crate::session::GraphSession;
use crate::style::{Color, EdgeStyle, StyleConfig, VertexStyle};

pub(super) fn encode(session: &GraphSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", session.entities().len());

    for entity in session.entities() {
        match entity {
            EntityId::Vertex { label } => {
                let Some(vertex) = session.vertex(label) else {
                    continue;
                };
                let style = &vertex.style;
                let _ = writeln!(
                    out,
                    "V {} {} {} {} {} {} {}",
                    vertex.label(),
                    format_number(vertex.position.x),
                    format_number(vertex.position.y),
                    style.fill,
                    style.radius,
                    style.text_size,
                    style.font_name
                );
            }
            EntityId::Edge { key } => {
                let (a, b) = key.endpoints();
                let Some(edge) = session.find_edge(a, b) else {
                    continue;
                };
                let _ = writeln!(
                    out,
                    "E {} {} {} {}",
                    edge.from(),
                    edge.to(),
                    edge.style.color,
                    edge.style.width
                );
            }
        }
    }
    out
}

struct VertexRecord<'a> {
    line: usize,
    label: &'a str,
    position: Point,
    style: VertexStyle,
}

struct EdgeRecord<'a> {
    line: usize,
    from: &'a str,
    to: &'a str,
    style: EdgeStyle,
}

pub(super) fn decode(text: &str, style: &StyleConfig) -> GraphResult<GraphSession> {
    let mut lines = content_lines(text);
    let (header_line, header) = lines
        .next()
        .ok_or_else(|| GraphError::parse(1, "file is empty"))?;

    let fields: Vec<&str> = header.split_whitespace().collect();
    let [total] = fields[..] else {
        return Err(GraphError::parse(
            header_line,
            format!("header needs 1 field, found {}", fields.len()),
        ));
    };
    let total = parse_count(total, header_line, "entity count")?;

    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    let mut order = Vec::new();
    let mut seen = 0usize;

    for (line, content) in lines {
        seen += 1;
        if seen > total {
            return Err(GraphError::parse(
                line,
                format!("header declares {total} entities but the file has more"),
            ));
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        match fields.first().copied() {
            Some("V") => {
                let record = parse_vertex(&fields, line)?;
                order.push(EntityId::Vertex {
                    label: record.label.to_string(),
                });
                vertices.push(record);
            }
            Some("E") => {
                let record = parse_edge(&fields, line)?;
                order.push(EntityId::Edge {
                    key: EdgeKey::new(record.from, record.to),
                });
                edges.push(record);
            }
            Some(tag) => {
                return Err(GraphError::parse(line, format!("unknown entity tag \"{tag}\"")));
            }
            None => continue,
        }
    }

    if seen < total {
        return Err(GraphError::parse(
            header_line,
            format!("header declares {total} entities but the file has {seen}"),
        ));
    }

    // Edges may precede their endpoints in the file, so vertices go first.
    let mut session = GraphSession::new(style.clone());
    for record in vertices {
        session
            .insert_vertex(record.label, record.position, record.style)
            .map_err(|e| at_line(record.line, e))?;
    }
    for record in edges {
        session
            .insert_edge(record.from, record.to, record.style)
            .map_err(|e| at_line(record.line, e))?;
    }
    session.restore_order(order);

    Ok(session)
}

fn parse_vertex<'a>(fields: &[&'a str], line: usize) -> GraphResult<VertexRecord<'a>> {
    if fields.len() < 8 {
        return Err(GraphError::parse(
            line,
            format!("vertex line needs at least 8 fields, found {}", fields.len()),
        ));
    }

    let style = VertexStyle {
        fill: parse_color(fields[4], line)?,
        radius: parse_size(fields[5], line, "radius")?,
        text_size: parse_size(fields[6], line, "text size")?,
        font_name: fields[7..].join(" "),
    };
    style
        .validate()
        .map_err(|e| GraphError::parse(line, e.to_string()))?;

    Ok(VertexRecord {
        line,
        label: fields[1],
        position: Point::new(
            parse_coordinate(fields[2], line)?,
            parse_coordinate(fields[3], line)?,
        ),
        style,
    })
}

fn parse_edge<'a>(fields: &[&'a str], line: usize) -> GraphResult<EdgeRecord<'a>> {
    let [_, from, to, color, width] = fields[..] else {
        return Err(GraphError::parse(
            line,
            format!("edge line needs 5 fields, found {}", fields.len()),
        ));
    };

    let style = EdgeStyle {
        color: parse_color(color, line)?,
        width: parse_size(width, line, "width")?,
    };
    style
        .validate()
        .map_err(|e| GraphError::parse(line, e.to_string()))?;

    Ok(EdgeRecord {
        line,
        from,
        to,
        style,
    })
}

fn parse_color(field: &str, line: usize) -> GraphResult<Color> {
    field
        .parse()
        .map_err(|e: GraphError| GraphError::parse(line, e.to_string()))
}

fn parse_size(field: &str, line: usize, what: &str) -> GraphResult<u32> {
    field
        .parse()
        .map_err(|_| GraphError::parse(line, format!("{what} \"{field}\" is not a whole number")))
}
