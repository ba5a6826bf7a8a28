//! All-or-nothing batches of graph edits.

use serde::Deserialize;

use super::manager::SessionManager;
use crate::types::{ServerError, ServerResult};

/// One queued edit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BatchOp {
    AddVertex { label: String, x: f64, y: f64 },
    RemoveVertex { label: String },
    MoveVertex { label: String, x: f64, y: f64 },
    AddEdge { from: String, to: String },
    RemoveEdge { from: String, to: String },
}

impl BatchOp {
    fn apply(&self, session: &mut SessionManager) -> ServerResult<()> {
        let graph = session.graph_mut();
        match self {
            BatchOp::AddVertex { label, x, y } => {
                graph.add_vertex(label, *x, *y)?;
            }
            BatchOp::RemoveVertex { label } => {
                graph.remove_vertex(label)?;
            }
            BatchOp::MoveVertex { label, x, y } => {
                graph.move_vertex(label, *x, *y)?;
            }
            BatchOp::AddEdge { from, to } => {
                graph.add_edge(from, to)?;
            }
            BatchOp::RemoveEdge { from, to } => {
                graph.remove_edge(from, to)?;
            }
        }
        Ok(())
    }
}

/// Collects edits and applies them together. If any edit fails the graph
/// is restored to its state before the first one.
pub struct Transaction<'a> {
    session: &'a mut SessionManager,
    ops: Vec<BatchOp>,
}

impl<'a> Transaction<'a> {
    pub fn new(session: &'a mut SessionManager) -> Self {
        Self {
            session,
            ops: Vec::new(),
        }
    }

    /// Queue an edit.
    pub fn push(&mut self, op: BatchOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn extend(&mut self, ops: impl IntoIterator<Item = BatchOp>) -> &mut Self {
        self.ops.extend(ops);
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply every queued edit in order. Returns how many were applied.
    pub fn commit(self) -> ServerResult<usize> {
        if self.ops.is_empty() {
            return Ok(0);
        }

        let snapshot = self.session.graph().clone();
        for (index, op) in self.ops.iter().enumerate() {
            if let Err(err) = op.apply(self.session) {
                self.session.replace_graph(snapshot);
                tracing::debug!("Batch rolled back at operation {index}: {err}");
                return Err(ServerError::Batch {
                    index,
                    source: Box::new(err),
                });
            }
        }
        Ok(self.ops.len())
    }
}
