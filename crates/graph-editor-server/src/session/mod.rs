//! Session management: graph lifecycle and batched edits.

pub mod manager;
pub mod transaction;

pub use manager::SessionManager;
pub use transaction::{BatchOp, Transaction};
