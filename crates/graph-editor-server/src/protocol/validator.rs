//! Envelope checks shared by requests and notifications.

use crate::types::{ServerError, ServerResult, JSONRPC_VERSION};

pub fn validate_version(version: &str) -> ServerResult<()> {
    if version != JSONRPC_VERSION {
        return Err(ServerError::InvalidRequest(format!(
            "unsupported jsonrpc version {version:?}, expected \"{JSONRPC_VERSION}\""
        )));
    }
    Ok(())
}

pub fn validate_method(method: &str) -> ServerResult<()> {
    if method.is_empty() {
        return Err(ServerError::InvalidRequest("empty method name".to_string()));
    }
    Ok(())
}
