//! Graph Editor core: undirected labeled graph sessions and their text formats.
//!
//! A [`GraphSession`] owns the vertices, the edges, their creation order and
//! the save state. The [`format`] module encodes a session to either the
//! minimal (topology + positions) or the extended (topology + positions +
//! styles) line format and writes files atomically.

pub mod error;
pub mod format;
pub mod model;
pub mod random;
pub mod session;
pub mod style;

pub use error::{GraphError, GraphResult};
pub use format::{decode, detect, encode, load_from_file, save_to_file, Format};
pub use model::{Edge, EdgeKey, EntityId, Point, Vertex};
pub use random::{Bounds, RandomGraphSpec, RandomSummary};
pub use session::{GraphSession, SessionState};
pub use style::{Color, EdgeStyle, StyleConfig, VertexStyle};

/// Suffix of the window title shown by presentation layers.
pub const APP_TITLE: &str = "Graph Editor";
