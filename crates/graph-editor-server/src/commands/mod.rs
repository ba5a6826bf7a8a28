//! Commands reachable through `commands/call`, one module per command.

pub mod edge_add;
pub mod edge_find;
pub mod edge_remove;
pub mod file_close;
pub mod file_new;
pub mod file_open;
pub mod file_save;
pub mod graph_batch;
pub mod graph_clear;
pub mod graph_random;
pub mod graph_view;
pub mod registry;
pub mod session_status;
pub mod style_get;
pub mod style_set;
pub mod vertex_add;
pub mod vertex_move;
pub mod vertex_remove;

pub use registry::CommandRegistry;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{ServerError, ServerResult};

/// Deserialize command arguments, reporting failures as invalid params.
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> ServerResult<T> {
    serde_json::from_value(args).map_err(|e| ServerError::InvalidParams(e.to_string()))
}
