//! Vertices, edges and the identifiers used to order them.

use serde::Serialize;

use crate::style::{EdgeStyle, VertexStyle};

/// Centre of a vertex on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A labeled vertex. Two vertices are equal when their labels are.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    pub(crate) label: String,
    pub position: Point,
    pub style: VertexStyle,
}

impl Vertex {
    pub(crate) fn new(label: String, position: Point, style: VertexStyle) -> Self {
        Self {
            label,
            position,
            style,
        }
    }

    /// The vertex label, fixed at creation.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

/// Orientation-free identity of an edge: the endpoint labels in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey(String, String);

impl EdgeKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }

    /// Both endpoints, smaller label first.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }

    pub fn touches(&self, label: &str) -> bool {
        self.0 == label || self.1 == label
    }
}

/// An undirected edge. `from`/`to` keep the orientation it was created with,
/// which only matters for output; equality ignores it.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub(crate) from: String,
    pub(crate) to: String,
    pub style: EdgeStyle,
}

impl Edge {
    pub(crate) fn new(from: String, to: String, style: EdgeStyle) -> Self {
        Self { from, to, style }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.from, &self.to)
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn is_incident(&self, label: &str) -> bool {
        self.from == label || self.to == label
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.from, &other.to)
    }
}

impl Eq for Edge {}

/// Entry of the session's creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityId {
    Vertex { label: String },
    Edge { key: EdgeKey },
}
