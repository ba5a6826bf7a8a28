//! Routes JSON-RPC messages to the handshake, the command registry and
//! the session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use crate::commands::CommandRegistry;
use crate::session::SessionManager;
use crate::types::{
    CommandCallParams, CommandListResult, ErrorResponse, InitializeParams, Message, Notification,
    Request, RequestId, Response, ServerError, ServerResult,
};

use super::negotiation::Negotiated;
use super::validator::{validate_method, validate_version};

/// Handles one message at a time on behalf of a transport.
pub struct ProtocolHandler {
    session: Arc<Mutex<SessionManager>>,
    negotiated: Mutex<Negotiated>,
    shutdown: AtomicBool,
}

impl ProtocolHandler {
    pub fn new(session: Arc<Mutex<SessionManager>>) -> Self {
        Self {
            session,
            negotiated: Mutex::new(Negotiated::default()),
            shutdown: AtomicBool::new(false),
        }
    }

    /// The shared session this handler drives.
    pub fn session(&self) -> &Arc<Mutex<SessionManager>> {
        &self.session
    }

    /// Set once a `shutdown` request has been answered.
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Handle one raw line. Returns the reply to write, if any.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Unparseable line: {e}");
                return Some(error_reply(RequestId::Null, &ServerError::Parse(e.to_string())));
            }
        };

        match serde_json::from_value::<Message>(value.clone()) {
            Ok(message) => self.handle_message(message).await,
            Err(_) => {
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok())
                    .unwrap_or(RequestId::Null);
                Some(error_reply(
                    id,
                    &ServerError::InvalidRequest("not a JSON-RPC 2.0 message".to_string()),
                ))
            }
        }
    }

    /// Handle a decoded message. Notifications and stray replies get no answer.
    pub async fn handle_message(&self, message: Message) -> Option<Value> {
        match message {
            Message::Request(request) => Some(self.handle_request(request).await),
            Message::Notification(notification) => {
                self.handle_notification(notification).await;
                None
            }
            Message::Response(_) | Message::Error(_) => {
                tracing::debug!("Ignoring reply sent by client");
                None
            }
        }
    }

    async fn handle_request(&self, request: Request) -> Value {
        let id = request.id.clone();
        let method = request.method.clone();
        match self.dispatch(request).await {
            Ok(result) => json!(Response::new(id, result)),
            Err(err) => {
                tracing::debug!("Request {id} ({method}) failed: {err}");
                error_reply(id, &err)
            }
        }
    }

    async fn dispatch(&self, request: Request) -> ServerResult<Value> {
        validate_version(&request.jsonrpc)?;
        validate_method(&request.method)?;

        match request.method.as_str() {
            "initialize" => {
                let params: InitializeParams = parse_params(request.params)?;
                let commands = CommandRegistry::list_commands().len();
                let result = self.negotiated.lock().await.negotiate(params, commands)?;
                Ok(json!(result))
            }
            "ping" => Ok(json!({})),
            "shutdown" => {
                tracing::info!("Shutdown requested");
                self.shutdown.store(true, Ordering::SeqCst);
                Ok(json!({}))
            }
            method => {
                self.negotiated.lock().await.ensure_initialized()?;
                match method {
                    "commands/list" => Ok(json!(CommandListResult {
                        commands: CommandRegistry::list_commands(),
                    })),
                    "commands/call" => {
                        let params: CommandCallParams = parse_params(request.params)?;
                        let result =
                            CommandRegistry::call(&params.name, params.arguments, &self.session)
                                .await?;
                        Ok(json!(result))
                    }
                    other => Err(ServerError::MethodNotFound(other.to_string())),
                }
            }
        }
    }

    async fn handle_notification(&self, notification: Notification) {
        if let Err(err) = validate_version(&notification.jsonrpc) {
            tracing::warn!("Dropping notification: {err}");
            return;
        }
        match notification.method.as_str() {
            "initialized" | "notifications/initialized" => {
                if let Err(err) = self.negotiated.lock().await.mark_initialized() {
                    tracing::warn!("{err}");
                }
            }
            other => tracing::debug!("Ignoring notification {other}"),
        }
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(params: Option<Value>) -> ServerResult<T> {
    let params = params.ok_or_else(|| ServerError::InvalidParams("missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| ServerError::InvalidParams(e.to_string()))
}

fn error_reply(id: RequestId, err: &ServerError) -> Value {
    json!(ErrorResponse::new(id, err.to_error_object()))
}
