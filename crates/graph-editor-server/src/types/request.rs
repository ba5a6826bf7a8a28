//! Request parameter types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for `commands/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandCallParams {
    /// Command name.
    pub name: String,
    /// Command arguments.
    #[serde(default)]
    pub arguments: Option<Value>,
}
