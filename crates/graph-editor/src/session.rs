//! The editable graph together with its save state.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, GraphResult};
use crate::format::{self, Format};
use crate::model::{Edge, EdgeKey, EntityId, Point, Vertex};
use crate::style::{EdgeStyle, StyleConfig, VertexStyle};

/// Whether the in-memory graph matches what was last persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Clean,
    Dirty,
}

/// An undirected labeled graph plus the file it belongs to.
///
/// Vertices are keyed by label, edges are kept in creation order and
/// `order` records the interleaved creation order of both, which the
/// extended file format reproduces. Every mutation updates all three in the
/// same call and marks the session dirty.
#[derive(Debug, Clone, Default)]
pub struct GraphSession {
    vertices: HashMap<String, Vertex>,
    edges: Vec<Edge>,
    order: Vec<EntityId>,
    style: StyleConfig,
    current_file: Option<PathBuf>,
    format: Format,
    dirty: bool,
}

impl GraphSession {
    /// Empty, untitled, clean session whose new entities use `style`.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Read a graph file. The returned session is clean and remembers the
    /// path and format for later saves. `None` detects the format.
    pub fn open(
        path: impl AsRef<Path>,
        format: Option<Format>,
        style: StyleConfig,
    ) -> GraphResult<Self> {
        let path = path.as_ref();
        let mut session = format::load_from_file(path, format, &style)?;
        session.current_file = Some(path.to_path_buf());
        log::info!(
            "Opened {} ({} vertices, {} edges)",
            path.display(),
            session.vertex_count(),
            session.edge_count()
        );
        Ok(session)
    }

    // ── vertices ─────────────────────────────────────────────────────────

    /// Insert a vertex at `(x, y)` using the current vertex style.
    pub fn add_vertex(&mut self, label: &str, x: f64, y: f64) -> GraphResult<&Vertex> {
        let style = self.style.vertex.clone();
        self.insert_vertex(label, Point::new(x, y), style)
    }

    pub(crate) fn insert_vertex(
        &mut self,
        label: &str,
        position: Point,
        style: VertexStyle,
    ) -> GraphResult<&Vertex> {
        if label.is_empty() {
            return Err(GraphError::DuplicateLabel(String::new()));
        }
        if label.chars().any(char::is_whitespace) {
            return Err(GraphError::InvalidLabel(label.to_string()));
        }
        check_position(position)?;

        match self.vertices.entry(label.to_string()) {
            Entry::Occupied(_) => Err(GraphError::DuplicateLabel(label.to_string())),
            Entry::Vacant(slot) => {
                self.order.push(EntityId::Vertex {
                    label: label.to_string(),
                });
                self.dirty = true;
                log::debug!("Added vertex {label} at ({}, {})", position.x, position.y);
                Ok(slot.insert(Vertex::new(label.to_string(), position, style)))
            }
        }
    }

    /// Remove a vertex and every edge touching it. Returns the removed edges.
    pub fn remove_vertex(&mut self, label: &str) -> GraphResult<Vec<Edge>> {
        if !self.vertices.contains_key(label) {
            return Err(GraphError::NotFound(format!("vertex \"{label}\"")));
        }

        let (removed, kept): (Vec<Edge>, Vec<Edge>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|edge| edge.is_incident(label));
        self.edges = kept;

        self.order.retain(|entity| match entity {
            EntityId::Vertex { label: l } => l != label,
            EntityId::Edge { key } => !key.touches(label),
        });
        self.vertices.remove(label);
        self.dirty = true;

        log::debug!("Removed vertex {label} and {} incident edge(s)", removed.len());
        Ok(removed)
    }

    /// Move a vertex, as at the end of a drag.
    pub fn move_vertex(&mut self, label: &str, x: f64, y: f64) -> GraphResult<&Vertex> {
        let vertex = self
            .vertices
            .get_mut(label)
            .ok_or_else(|| GraphError::NotFound(format!("vertex \"{label}\"")))?;
        let position = Point::new(x, y);
        check_position(position)?;
        vertex.position = position;
        self.dirty = true;
        Ok(vertex)
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.order.iter().filter_map(|entity| match entity {
            EntityId::Vertex { label } => self.vertices.get(label),
            EntityId::Edge { .. } => None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ── edges ────────────────────────────────────────────────────────────

    /// Connect two existing vertices using the current edge style.
    pub fn add_edge(&mut self, from: &str, to: &str) -> GraphResult<&Edge> {
        let style = self.style.edge.clone();
        self.insert_edge(from, to, style)
    }

    pub(crate) fn insert_edge(&mut self, from: &str, to: &str, style: EdgeStyle) -> GraphResult<&Edge> {
        self.check_endpoints(from, to)?;
        if self.find_edge(from, to).is_some() {
            return Err(GraphError::DuplicateEdge(from.to_string(), to.to_string()));
        }

        let index = self.edges.len();
        self.edges
            .push(Edge::new(from.to_string(), to.to_string(), style));
        self.order.push(EntityId::Edge {
            key: EdgeKey::new(from, to),
        });
        self.dirty = true;

        log::debug!("Added edge {from} -- {to}");
        Ok(&self.edges[index])
    }

    /// Remove the edge joining `from` and `to`, in either orientation.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> GraphResult<Edge> {
        self.check_endpoints(from, to)?;
        let index = self
            .edges
            .iter()
            .position(|edge| edge.connects(from, to))
            .ok_or_else(|| GraphError::NotFound(format!("edge between \"{from}\" and \"{to}\"")))?;

        let edge = self.edges.remove(index);
        let key = edge.key();
        self.order
            .retain(|entity| !matches!(entity, EntityId::Edge { key: k } if *k == key));
        self.dirty = true;

        log::debug!("Removed edge {from} -- {to}");
        Ok(edge)
    }

    fn check_endpoints(&self, from: &str, to: &str) -> GraphResult<()> {
        for label in [from, to] {
            if !self.vertices.contains_key(label) {
                return Err(GraphError::MissingVertex(label.to_string()));
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop(from.to_string()));
        }
        Ok(())
    }

    /// Undirected lookup.
    pub fn find_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(from, to))
    }

    pub fn edges_incident(&self, label: &str) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|edge| edge.is_incident(label))
            .collect()
    }

    /// Edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── whole graph ──────────────────────────────────────────────────────

    /// Interleaved creation order of vertices and edges.
    pub fn entities(&self) -> &[EntityId] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Drop every vertex and edge. The dirty flag is left to the caller.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.order.clear();
    }

    /// Start over as a new untitled, clean session.
    pub fn reset(&mut self) {
        self.clear();
        self.current_file = None;
        self.dirty = false;
    }

    pub(crate) fn restore_order(&mut self, order: Vec<EntityId>) {
        debug_assert_eq!(order.len(), self.vertices.len() + self.edges.len());
        self.order = order;
    }

    // ── styles ───────────────────────────────────────────────────────────

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replace the style used for entities created from now on.
    pub fn set_style(&mut self, style: StyleConfig) -> GraphResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    // ── save state ───────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        if self.dirty {
            SessionState::Dirty
        } else {
            SessionState::Clean
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Format used by [`save`](Self::save).
    pub fn format(&self) -> Format {
        self.format
    }

    /// `Untitled` or the file name, `*` when dirty, then the app name.
    pub fn title(&self) -> String {
        let name = self
            .current_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let marker = if self.dirty { "*" } else { "" };
        format!("{name}{marker} - {}", crate::APP_TITLE)
    }

    /// Write to the current file in the current format.
    pub fn save(&mut self) -> GraphResult<PathBuf> {
        let path = self.current_file.clone().ok_or(GraphError::Untitled)?;
        format::save_to_file(self, &path, self.format)?;
        self.dirty = false;
        log::info!("Saved {}", path.display());
        Ok(path)
    }

    /// Write to `path` and make it the current file.
    pub fn save_as(&mut self, path: impl AsRef<Path>, format: Format) -> GraphResult<()> {
        let path = path.as_ref();
        format::save_to_file(self, path, format)?;
        self.current_file = Some(path.to_path_buf());
        self.format = format;
        self.dirty = false;
        log::info!("Saved {} as {format}", path.display());
        Ok(())
    }

    pub(crate) fn set_format(&mut self, format: Format) {
        self.format = format;
    }
}

/// Coordinates must survive an encode/decode round trip.
fn check_position(position: Point) -> GraphResult<()> {
    if position.x.is_finite() && position.y.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidPosition {
            x: position.x,
            y: position.y,
        })
    }
}
