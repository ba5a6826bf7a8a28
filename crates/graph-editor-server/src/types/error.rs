//! Server error type and its mapping to JSON-RPC error codes.

use graph_editor::GraphError;
use serde_json::json;

use super::message::ErrorObject;

/// Standard JSON-RPC codes.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    /// Application range, one code per graph error family.
    pub const DUPLICATE_LABEL: i32 = -32001;
    pub const NOT_FOUND: i32 = -32002;
    pub const MISSING_VERTEX: i32 = -32003;
    pub const SELF_LOOP: i32 = -32004;
    pub const DUPLICATE_EDGE: i32 = -32005;
    pub const PARSE_FILE: i32 = -32006;
    pub const DANGLING_EDGE: i32 = -32007;
    pub const PERSISTENCE: i32 = -32008;
    pub const INVALID_VALUE: i32 = -32009;
    pub const UNSAVED_CHANGES: i32 = -32010;
    pub const COMMAND_NOT_FOUND: i32 = -32011;
}

/// Errors raised while handling a message.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("method not found: {0}")]
    MethodNotFound(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("session has unsaved changes; save first or pass force")]
    UnsavedChanges,

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A batch operation failed and the batch was rolled back.
    #[error("batch operation {index} failed: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<ServerError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            ServerError::Parse(_) => codes::PARSE_ERROR,
            ServerError::InvalidRequest(_) => codes::INVALID_REQUEST,
            ServerError::MethodNotFound(_) => codes::METHOD_NOT_FOUND,
            ServerError::InvalidParams(_) => codes::INVALID_PARAMS,
            ServerError::CommandNotFound(_) => codes::COMMAND_NOT_FOUND,
            ServerError::UnsavedChanges => codes::UNSAVED_CHANGES,
            ServerError::Graph(err) => match err {
                GraphError::DuplicateLabel(_) | GraphError::InvalidLabel(_) => {
                    codes::DUPLICATE_LABEL
                }
                GraphError::NotFound(_) => codes::NOT_FOUND,
                GraphError::MissingVertex(_) => codes::MISSING_VERTEX,
                GraphError::SelfLoop(_) => codes::SELF_LOOP,
                GraphError::DuplicateEdge(..) => codes::DUPLICATE_EDGE,
                GraphError::ParseError { .. } => codes::PARSE_FILE,
                GraphError::DanglingEdgeReference { .. } => codes::DANGLING_EDGE,
                GraphError::Persistence { .. } | GraphError::Untitled => codes::PERSISTENCE,
                GraphError::InvalidPosition { .. }
                | GraphError::InvalidStyle(_)
                | GraphError::InvalidRandomSpec(_) => codes::INVALID_VALUE,
            },
            ServerError::Batch { source, .. } => source.code(),
            ServerError::Io(_) => codes::PERSISTENCE,
            ServerError::Config(_) | ServerError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Short machine-readable kind, reported in `error.data.kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Parse(_) => "Parse",
            ServerError::InvalidRequest(_) => "InvalidRequest",
            ServerError::MethodNotFound(_) => "MethodNotFound",
            ServerError::InvalidParams(_) => "InvalidParams",
            ServerError::CommandNotFound(_) => "CommandNotFound",
            ServerError::UnsavedChanges => "UnsavedChanges",
            ServerError::Graph(err) => err.kind(),
            ServerError::Batch { source, .. } => source.kind(),
            ServerError::Io(_) => "PersistenceError",
            ServerError::Config(_) => "Config",
            ServerError::Internal(_) => "Internal",
        }
    }

    pub fn to_error_object(&self) -> ErrorObject {
        let data = match self {
            ServerError::Batch { index, .. } => json!({ "kind": self.kind(), "index": index }),
            _ => json!({ "kind": self.kind() }),
        };
        ErrorObject {
            code: self.code(),
            message: self.to_string(),
            data: Some(data),
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
