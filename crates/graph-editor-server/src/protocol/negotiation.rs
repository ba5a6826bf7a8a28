//! Handshake state.

use crate::types::{
    Implementation, InitializeParams, InitializeResult, ServerError, ServerResult,
    PROTOCOL_VERSION,
};

/// What the client told us during `initialize`.
#[derive(Debug, Clone, Default)]
pub struct Negotiated {
    /// Set once `initialize` succeeds.
    pub client: Option<Implementation>,
    /// Whether the handshake is complete.
    pub initialized: bool,
}

impl Negotiated {
    /// Process an initialize request and return the result.
    pub fn negotiate(
        &mut self,
        params: InitializeParams,
        commands: usize,
    ) -> ServerResult<InitializeResult> {
        if self.client.is_some() {
            return Err(ServerError::InvalidRequest(
                "initialize may only be sent once".to_string(),
            ));
        }
        if params.protocol_version != PROTOCOL_VERSION {
            tracing::warn!(
                "Client requested protocol version {}, server supports {}. Proceeding with server version.",
                params.protocol_version,
                PROTOCOL_VERSION
            );
        }

        tracing::info!(
            "Initialized with client: {} v{}",
            params.client_info.name,
            params.client_info.version
        );
        self.client = Some(params.client_info);

        Ok(InitializeResult::for_commands(commands))
    }

    /// Mark the handshake as complete (after the `initialized` notification).
    pub fn mark_initialized(&mut self) -> ServerResult<()> {
        if self.client.is_none() {
            return Err(ServerError::InvalidRequest(
                "initialized received before initialize".to_string(),
            ));
        }
        self.initialized = true;
        tracing::info!("Handshake complete");
        Ok(())
    }

    /// Check that the handshake is complete before processing requests.
    pub fn ensure_initialized(&self) -> ServerResult<()> {
        if !self.initialized {
            return Err(ServerError::InvalidRequest(
                "Server not yet initialized. Send 'initialize' first.".to_string(),
            ));
        }
        Ok(())
    }
}
