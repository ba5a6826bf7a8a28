//! Protocol layer: message handling, validation, and the handshake.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
