//! Transport layer: line-delimited JSON-RPC over stdio.

pub mod stdio;

pub use stdio::StdioTransport;
