//! Error types for session mutations and persistence.

use std::path::PathBuf;

/// Errors produced by [`GraphSession`](crate::GraphSession) operations and
/// the file formats.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A vertex with this label already exists, or the label is empty.
    #[error("vertex \"{0}\" already exists or the label is empty")]
    DuplicateLabel(String),

    /// The label cannot be stored in the whitespace separated file formats.
    #[error("invalid vertex label \"{0}\": labels may not contain whitespace")]
    InvalidLabel(String),

    /// A vertex position is NaN or infinite and could not be written out.
    #[error("position ({x}, {y}) is not finite")]
    InvalidPosition {
        x: f64,
        y: f64,
    },

    /// The vertex or edge does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// An edge endpoint names an unknown vertex.
    #[error("vertex \"{0}\" does not exist")]
    MissingVertex(String),

    /// Both endpoints of an edge are the same vertex.
    #[error("edge from \"{0}\" to itself is not allowed")]
    SelfLoop(String),

    /// The undirected edge already exists.
    #[error("edge between \"{0}\" and \"{1}\" already exists")]
    DuplicateEdge(String, String),

    /// Malformed graph file content.
    #[error("parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// An edge line references a label no vertex line declared.
    #[error("edge on line {line} references unknown vertex \"{label}\"")]
    DanglingEdgeReference {
        /// 1-based line number of the edge.
        line: usize,
        /// The unknown label.
        label: String,
    },

    /// Reading or writing a graph file failed.
    #[error("failed to access {}: {source}", path.display())]
    Persistence {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `save` was called on a session that has never been saved.
    #[error("session has no file yet, use save as")]
    Untitled,

    /// A style value is outside its allowed range.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// Random generation bounds are inconsistent.
    #[error("invalid random graph parameters: {0}")]
    InvalidRandomSpec(String),
}

impl GraphError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::DuplicateLabel(_) => "DuplicateLabel",
            GraphError::InvalidLabel(_) => "InvalidLabel",
            GraphError::InvalidPosition { .. } => "InvalidPosition",
            GraphError::NotFound(_) => "NotFound",
            GraphError::MissingVertex(_) => "MissingVertex",
            GraphError::SelfLoop(_) => "SelfLoop",
            GraphError::DuplicateEdge(..) => "DuplicateEdge",
            GraphError::ParseError { .. } => "ParseError",
            GraphError::DanglingEdgeReference { .. } => "DanglingEdgeReference",
            GraphError::Persistence { .. } => "PersistenceError",
            GraphError::Untitled => "Untitled",
            GraphError::InvalidStyle(_) => "InvalidStyle",
            GraphError::InvalidRandomSpec(_) => "InvalidRandomSpec",
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::ParseError {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Persistence {
            path: path.into(),
            source,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
