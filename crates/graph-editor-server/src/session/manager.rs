//! Graph session lifecycle: new/open/save, random graphs, status line.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use graph_editor::{Format, GraphSession, RandomGraphSpec, RandomSummary};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::types::{ServerError, ServerResult};

/// Owns the one graph session the server edits.
pub struct SessionManager {
    graph: GraphSession,
    random: RandomGraphSpec,
    default_format: Format,
    rng: StdRng,
    last_action: String,
    last_saved: Option<DateTime<Utc>>,
}

impl SessionManager {
    /// Empty untitled session.
    pub fn new(config: &ServerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            graph: GraphSession::new(config.style.clone()),
            random: config.random,
            default_format: config.default_format,
            rng,
            last_action: "New session".to_string(),
            last_saved: None,
        }
    }

    /// Session preloaded from a graph file.
    pub fn open(path: &Path, config: &ServerConfig) -> ServerResult<Self> {
        let mut session = Self::new(config);
        session.open_file(path, None, true)?;
        Ok(session)
    }

    /// Get an immutable reference to the graph.
    pub fn graph(&self) -> &GraphSession {
        &self.graph
    }

    /// Get a mutable reference to the graph. Mutations mark it dirty.
    pub fn graph_mut(&mut self) -> &mut GraphSession {
        &mut self.graph
    }

    pub(crate) fn replace_graph(&mut self, graph: GraphSession) {
        self.graph = graph;
    }

    /// Set the status line.
    pub fn record(&mut self, action: impl Into<String>) {
        self.last_action = action.into();
        tracing::info!("{}", self.last_action);
    }

    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn random_spec(&self) -> &RandomGraphSpec {
        &self.random
    }

    /// Replace the graph with a random one. Without a spec the configured one
    /// is used; a seed draws from a fresh generator instead of the session's.
    pub fn generate_random(
        &mut self,
        spec: Option<RandomGraphSpec>,
        seed: Option<u64>,
    ) -> ServerResult<RandomSummary> {
        let spec = spec.unwrap_or(self.random);
        let summary = match seed {
            Some(seed) => self
                .graph
                .generate_random(&spec, &mut StdRng::seed_from_u64(seed))?,
            None => self.graph.generate_random(&spec, &mut self.rng)?,
        };
        Ok(summary)
    }

    /// Refuse to throw away unsaved work unless forced.
    pub fn ensure_can_discard(&self, force: bool) -> ServerResult<()> {
        if self.graph.is_dirty() && !force {
            return Err(ServerError::UnsavedChanges);
        }
        Ok(())
    }

    /// The "New" action.
    pub fn new_file(&mut self, force: bool) -> ServerResult<()> {
        self.ensure_can_discard(force)?;
        self.graph.reset();
        self.last_saved = None;
        Ok(())
    }

    /// Replace the session with a file. On failure the current graph is kept.
    pub fn open_file(&mut self, path: &Path, format: Option<Format>, force: bool) -> ServerResult<()> {
        self.ensure_can_discard(force)?;
        let graph = GraphSession::open(path, format, self.graph.style().clone())?;
        tracing::info!(
            "Opened {} with {} vertices, {} edges",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        self.graph = graph;
        self.last_saved = None;
        Ok(())
    }

    /// Save to the current file; untitled sessions fail with `Untitled`.
    pub fn save(&mut self) -> ServerResult<PathBuf> {
        let path = self.graph.save()?;
        self.last_saved = Some(Utc::now());
        Ok(path)
    }

    /// Save to a new file. Without a format the session's current one is
    /// kept for titled sessions and the configured default used otherwise.
    pub fn save_as(&mut self, path: &Path, format: Option<Format>) -> ServerResult<PathBuf> {
        let format = format.unwrap_or_else(|| match self.graph.current_file() {
            Some(_) => self.graph.format(),
            None => self.default_format,
        });
        self.graph.save_as(path, format)?;
        self.last_saved = Some(Utc::now());
        Ok(path.to_path_buf())
    }

    /// Status snapshot for presentation layers.
    pub fn status(&self) -> Value {
        json!({
            "title": self.graph.title(),
            "dirty": self.graph.is_dirty(),
            "file": self.graph.current_file().map(|p| p.display().to_string()),
            "format": self.graph.format(),
            "vertex_count": self.graph.vertex_count(),
            "edge_count": self.graph.edge_count(),
            "last_action": self.last_action,
            "last_saved": self.last_saved.map(|t| t.to_rfc3339()),
        })
    }
}
